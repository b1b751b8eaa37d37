//! Static detection rule catalogs.
//!
//! Four ordered catalogs: frameworks, languages, tools, and testing
//! frameworks. Catalog order determines output order - frameworks are listed
//! in a human-curated priority order (a meta-framework before the view
//! library it wraps), which downstream reports rely on.

/// A single detection rule.
///
/// Clause semantics, evaluated in a fixed priority order:
///
/// 1. `required_files`: every path must exist (AND). When declared and
///    satisfied, the rule matches without consulting the other clauses.
/// 2. `marker_files`: any existing path matches (OR).
/// 3. `dependency_names`: any present manifest key matches (OR).
///
/// An empty slice means the clause is absent. Marker paths containing glob
/// characters never match - glob expansion is out of scope, and those
/// entries are kept for documentation value only. Dependency clauses on the
/// same rule still apply normally.
#[derive(Debug, Clone, Copy)]
pub struct DetectionRule {
    /// Stable lowercase identifier for the technology.
    pub name: &'static str,
    pub required_files: &'static [&'static str],
    pub marker_files: &'static [&'static str],
    pub dependency_names: &'static [&'static str],
}

impl DetectionRule {
    const fn new(
        name: &'static str,
        required_files: &'static [&'static str],
        marker_files: &'static [&'static str],
        dependency_names: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            required_files,
            marker_files,
            dependency_names,
        }
    }
}

const NONE: &[&str] = &[];

/// Framework catalog. Meta-frameworks come before the libraries they wrap.
pub static FRAMEWORKS: &[DetectionRule] = &[
    DetectionRule::new(
        "nextjs",
        NONE,
        &["next.config.js", "next.config.mjs", "next.config.ts"],
        &["next"],
    ),
    DetectionRule::new("nuxt", NONE, &["nuxt.config.js", "nuxt.config.ts"], &["nuxt"]),
    DetectionRule::new(
        "remix",
        NONE,
        &["remix.config.js"],
        &["@remix-run/react", "@remix-run/node"],
    ),
    DetectionRule::new("astro", NONE, &["astro.config.mjs", "astro.config.ts"], &["astro"]),
    DetectionRule::new("sveltekit", NONE, NONE, &["@sveltejs/kit"]),
    DetectionRule::new("react", NONE, NONE, &["react"]),
    DetectionRule::new("vue", NONE, &["vue.config.js"], &["vue"]),
    DetectionRule::new("svelte", NONE, &["svelte.config.js"], &["svelte"]),
    DetectionRule::new("angular", NONE, &["angular.json"], &["@angular/core"]),
    DetectionRule::new("solid", NONE, NONE, &["solid-js"]),
    DetectionRule::new("express", NONE, NONE, &["express"]),
    DetectionRule::new("fastify", NONE, NONE, &["fastify"]),
    DetectionRule::new("nestjs", NONE, &["nest-cli.json"], &["@nestjs/core"]),
    DetectionRule::new(
        "react-native",
        NONE,
        &["metro.config.js"],
        &["react-native", "expo"],
    ),
    DetectionRule::new("electron", NONE, NONE, &["electron"]),
    DetectionRule::new(
        "ionic",
        NONE,
        &["ionic.config.json"],
        &["@ionic/core", "@ionic/react", "@ionic/angular"],
    ),
    DetectionRule::new("flutter", NONE, &["pubspec.yaml"], NONE),
    // Rails is only claimed when both the Gemfile and the application
    // config are present; a Gemfile alone is just Ruby.
    DetectionRule::new("rails", &["Gemfile", "config/application.rb"], NONE, NONE),
    DetectionRule::new("django", NONE, &["manage.py"], NONE),
    DetectionRule::new("laravel", &["artisan", "composer.json"], NONE, NONE),
];

/// Language catalog.
pub static LANGUAGES: &[DetectionRule] = &[
    DetectionRule::new("typescript", NONE, &["tsconfig.json"], &["typescript"]),
    DetectionRule::new("javascript", NONE, &["package.json"], NONE),
    DetectionRule::new(
        "python",
        NONE,
        &["pyproject.toml", "requirements.txt", "setup.py", "setup.cfg"],
        NONE,
    ),
    DetectionRule::new("rust", NONE, &["Cargo.toml"], NONE),
    DetectionRule::new("go", NONE, &["go.mod"], NONE),
    DetectionRule::new("ruby", NONE, &["Gemfile"], NONE),
    DetectionRule::new("php", NONE, &["composer.json"], NONE),
    DetectionRule::new("java", NONE, &["pom.xml", "build.gradle"], NONE),
    DetectionRule::new("kotlin", NONE, &["build.gradle.kts"], NONE),
    DetectionRule::new("swift", NONE, &["Package.swift"], NONE),
    DetectionRule::new("dart", NONE, &["pubspec.yaml"], NONE),
];

/// Tool catalog: bundlers, linters, formatters, infrastructure.
pub static TOOLS: &[DetectionRule] = &[
    DetectionRule::new("vite", NONE, &["vite.config.js", "vite.config.ts"], &["vite"]),
    DetectionRule::new("turbopack", NONE, NONE, &["turbopack"]),
    DetectionRule::new("webpack", NONE, &["webpack.config.js"], &["webpack"]),
    DetectionRule::new("rollup", NONE, &["rollup.config.js", "rollup.config.mjs"], &["rollup"]),
    DetectionRule::new("esbuild", NONE, NONE, &["esbuild"]),
    DetectionRule::new("biome", NONE, &["biome.json", "biome.jsonc"], &["@biomejs/biome"]),
    DetectionRule::new(
        "eslint",
        NONE,
        &[
            ".eslintrc",
            ".eslintrc.json",
            ".eslintrc.js",
            "eslint.config.js",
            "eslint.config.mjs",
        ],
        &["eslint"],
    ),
    DetectionRule::new(
        "prettier",
        NONE,
        &[".prettierrc", ".prettierrc.json", "prettier.config.js"],
        &["prettier"],
    ),
    DetectionRule::new(
        "tailwind",
        NONE,
        &["tailwind.config.js", "tailwind.config.ts"],
        &["tailwindcss"],
    ),
    // The glob entry documents the convention; only the directory marker
    // can actually fire.
    DetectionRule::new(
        "storybook",
        NONE,
        &["*.stories.tsx", ".storybook"],
        &["storybook"],
    ),
    DetectionRule::new(
        "docker",
        NONE,
        &["Dockerfile", "docker-compose.yml", "docker-compose.yaml", "compose.yaml"],
        NONE,
    ),
    DetectionRule::new("turborepo", NONE, &["turbo.json"], &["turbo"]),
    DetectionRule::new("nx", NONE, &["nx.json"], &["nx"]),
    DetectionRule::new("pnpm", NONE, &["pnpm-lock.yaml", "pnpm-workspace.yaml"], NONE),
    DetectionRule::new("yarn", NONE, &["yarn.lock"], NONE),
    DetectionRule::new("github-actions", NONE, &[".github/workflows"], NONE),
    DetectionRule::new(
        "prisma",
        NONE,
        &["prisma/schema.prisma"],
        &["prisma", "@prisma/client"],
    ),
    DetectionRule::new("graphql", NONE, NONE, &["graphql"]),
];

/// Testing framework catalog.
pub static TESTING: &[DetectionRule] = &[
    DetectionRule::new(
        "vitest",
        NONE,
        &["vitest.config.ts", "vitest.config.js"],
        &["vitest"],
    ),
    DetectionRule::new("jest", NONE, &["jest.config.js", "jest.config.ts"], &["jest"]),
    DetectionRule::new("mocha", NONE, &[".mocharc.json", ".mocharc.yml"], &["mocha"]),
    DetectionRule::new(
        "cypress",
        NONE,
        &["cypress.config.js", "cypress.config.ts"],
        &["cypress"],
    ),
    DetectionRule::new(
        "playwright",
        NONE,
        &["playwright.config.js", "playwright.config.ts"],
        &["@playwright/test", "playwright"],
    ),
    DetectionRule::new(
        "testing-library",
        NONE,
        NONE,
        &[
            "@testing-library/react",
            "@testing-library/dom",
            "@testing-library/vue",
        ],
    ),
    DetectionRule::new("pytest", NONE, &["pytest.ini", "conftest.py"], NONE),
];
