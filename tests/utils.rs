use create_express_api::project::{PackageManager, ProjectRequest};
use std::fs;
use std::path::Path;

/// Manifest shipped by the test template, carrying the provenance fields
/// the patching stage must drop.
pub const TEMPLATE_MANIFEST: &str = r#"{
  "name": "express-typescript-mongodb-api",
  "version": "1.2.0",
  "description": "Express MongoDB TypeScript API with Authentication",
  "author": "",
  "license": "MIT",
  "repository": {
    "type": "git",
    "url": "https://github.com/example/express-typescript-mongodb-api.git"
  },
  "bugs": {
    "url": "https://github.com/example/express-typescript-mongodb-api/issues"
  },
  "homepage": "https://github.com/example/express-typescript-mongodb-api#readme",
  "scripts": {
    "dev": "ts-node-dev src/server.ts",
    "build": "tsc",
    "test": "jest"
  },
  "dependencies": {
    "express": "^4.19.2"
  }
}
"#;

/// A resolved request aimed at `workspace/<name>` with every optional
/// action disabled, so tests never shell out to npm or git.
pub fn quiet_request(workspace: &Path, name: &str) -> ProjectRequest {
    ProjectRequest {
        project_name: name.to_string(),
        target_path: workspace.join(name),
        description: "Test project".to_string(),
        author: "Integration Tests".to_string(),
        package_manager: PackageManager::Npm,
        init_vcs: false,
        install_deps: false,
    }
}

/// Write `contents` to `path`, creating parent directories first.
pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Build a small but complete template tree, including the working-copy
/// noise the exclusion policy must keep out of generated projects.
pub fn populate_template(root: &Path) {
    write_file(&root.join("package.json"), TEMPLATE_MANIFEST);
    write_file(&root.join("tsconfig.json"), "{\n  \"compilerOptions\": {}\n}\n");
    write_file(&root.join(".gitignore"), "node_modules/\ndist/\n");
    write_file(&root.join(".dockerignore"), "node_modules\n");
    write_file(&root.join(".env.development.example"), "PORT=5000\n");
    write_file(&root.join(".env.production.example"), "PORT=5000\n");
    write_file(&root.join("Dockerfile"), "FROM node:20-alpine\n");
    write_file(&root.join("docker-compose.yml"), "services: {}\n");
    write_file(&root.join("Makefile"), "dev:\n\tnpm run dev\n");
    write_file(&root.join("src/server.ts"), "import app from './app';\n");
    write_file(&root.join("src/app.ts"), "const app = {};\nexport default app;\n");

    // Noise a developed template accumulates.
    write_file(&root.join(".env"), "SECRET=real-secret\n");
    write_file(&root.join(".env.development"), "SECRET=real-secret\n");
    write_file(&root.join("package-lock.json"), "{}\n");
    write_file(&root.join("node_modules/express/package.json"), "{}\n");
    write_file(&root.join("node_modules/express/index.js"), "//\n");
    write_file(&root.join("dist/server.js"), "//\n");
    write_file(&root.join("logs/app.log"), "boot\n");
    write_file(&root.join("coverage/lcov.info"), "TN:\n");
    write_file(&root.join(".idea/workspace.xml"), "<project/>\n");
    write_file(&root.join(".DS_Store"), "\n");
}
