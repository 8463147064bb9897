mod harness;

use harness::{RegistryServer, TestContext};
use predicates::prelude::*;

const CARD_SOURCE: &str = "export default function Card() { return <div className=\"card\" />; }\n";

#[test]
fn add_downloads_component_into_components_dir() {
    let ctx = TestContext::with_tailwind("3.4.17");
    let mut registry = RegistryServer::start();
    let mock = registry.serve("src/components/Card.tsx", CARD_SOURCE);

    ctx.cli_with_registry(&registry.base_url())
        .args(["add", "Card"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Card.tsx successfully added to the project at src/components/reuseit/Card.tsx",
        ));

    mock.assert();
    assert_eq!(ctx.read_file("src/components/reuseit/Card.tsx"), CARD_SOURCE);
}

#[test]
fn add_matches_names_case_insensitively() {
    let ctx = TestContext::with_tailwind("4.0.6");
    let mut registry = RegistryServer::start();
    let mock = registry.serve("src/components/RadioButton.tsx", "radio");

    ctx.cli_with_registry(&registry.base_url()).args(["a", "RADIOBUTTON"]).assert().success();

    mock.assert();
    assert_eq!(ctx.read_file("src/components/reuseit/RadioButton.tsx"), "radio");
}

#[test]
fn add_requires_tailwind_to_be_declared() {
    let ctx = TestContext::new();
    ctx.write_package_json(false);
    let mut registry = RegistryServer::start();
    let mock = registry.forbid("src/components/Card.tsx");

    ctx.cli_with_registry(&registry.base_url())
        .args(["add", "card"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Tailwind CSS is not installed"));

    mock.assert();
    assert!(!ctx.file_exists("src/components/reuseit"));
}

#[test]
fn add_rejects_unknown_component() {
    let ctx = TestContext::with_tailwind("3.4.17");

    ctx.cli()
        .args(["add", "spaceship"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not find component 'spaceship'!"));

    assert!(!ctx.file_exists("src/components/reuseit"));
}

#[test]
fn add_leaves_project_untouched_when_download_fails() {
    let ctx = TestContext::with_tailwind("3.4.17");
    let mut registry = RegistryServer::start();
    registry.fail("src/components/Modal.tsx", 404);

    ctx.cli_with_registry(&registry.base_url())
        .args(["add", "modal"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to fetch"))
        .stderr(predicate::str::contains("404"));

    assert!(!ctx.file_exists("src/components/reuseit"));
}

#[test]
fn add_snippet_does_not_require_tailwind() {
    let ctx = TestContext::new();
    ctx.write_package_json(false);
    let mut registry = RegistryServer::start();
    let mock = registry.serve("src/utils/useDebounce.tsx", "export const useDebounce = 1;\n");

    ctx.cli_with_registry(&registry.base_url())
        .args(["add-snippet", "useDebounce"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "useDebounce.tsx successfully added to the project at src/utils/useDebounce.tsx",
        ));

    mock.assert();
    assert_eq!(ctx.read_file("src/utils/useDebounce.tsx"), "export const useDebounce = 1;\n");
}

#[test]
fn add_snippet_rejects_component_names() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["add-snippet", "card"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not find snippet 'card'!"));
}

#[test]
fn add_honors_configured_directories() {
    let ctx = TestContext::with_tailwind("3.4.17");
    ctx.write_file(
        ".reuseit.toml",
        r#"[paths]
components_dir = "app/ui"
snippets_dir = "lib"
"#,
    );
    let mut registry = RegistryServer::start();
    let component = registry.serve("src/components/Badge.tsx", "badge");
    let snippet = registry.serve("src/utils/multer.ts", "multer");

    ctx.cli_with_registry(&registry.base_url()).args(["add", "badge"]).assert().success();
    ctx.cli_with_registry(&registry.base_url()).args(["add-snippet", "multer"]).assert().success();

    component.assert();
    snippet.assert();
    assert_eq!(ctx.read_file("app/ui/Badge.tsx"), "badge");
    assert_eq!(ctx.read_file("lib/multer.ts"), "multer");
}

#[test]
fn add_reads_base_url_from_config_file() {
    let ctx = TestContext::with_tailwind("3.4.17");
    let mut registry = RegistryServer::start();
    let mock = registry.serve("src/components/Alert.tsx", "alert");
    ctx.write_file(
        ".reuseit.toml",
        &format!("[registry]\nbase_url = \"{}\"\ntimeout_secs = 5\n", registry.base_url()),
    );

    ctx.cli().args(["add", "alert"]).assert().success();

    mock.assert();
    assert_eq!(ctx.read_file("src/components/reuseit/Alert.tsx"), "alert");
}

#[test]
fn invalid_config_file_is_reported() {
    let ctx = TestContext::with_tailwind("3.4.17");
    ctx.write_file(".reuseit.toml", "[paths]\ncomponents_dir = \"../outside\"\n");

    ctx.cli()
        .args(["add", "card"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
}
