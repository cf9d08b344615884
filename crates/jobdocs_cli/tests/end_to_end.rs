use std::process::Command;

struct Cli {
    database_url: String,
}

impl Cli {
    fn run(&self, args: &[&str]) -> std::process::Output {
        Command::new(env!("CARGO"))
            .args(["run", "-p", "jobdocs_cli", "--quiet", "--"])
            .args(args)
            .env("DATABASE_URL", &self.database_url)
            .output()
            .expect("Failed to run jobdocs_cli")
    }
}

#[test]
fn test_full_lifecycle() {
    // 1. Scratch database file
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("e2e.db");
    let cli = Cli {
        database_url: format!("sqlite://{}?mode=rwc", db_path.display()),
    };

    // 2. Rebuild schema
    println!("🧪 Running Rebuild...");
    let rebuild = cli.run(&["rebuild"]);
    if !rebuild.status.success() {
        eprintln!("Rebuild Stderr: {}", String::from_utf8_lossy(&rebuild.stderr));
        panic!("Rebuild failed");
    }

    // 3. Add a document
    println!("🧪 Running AddDoc...");
    let add = cli.run(&[
        "add-doc",
        "--title",
        "Resume A",
        "--category",
        "resume",
        "--content",
        "work history goes here",
    ]);
    if !add.status.success() {
        eprintln!("AddDoc Stderr: {}", String::from_utf8_lossy(&add.stderr));
        panic!("AddDoc failed");
    }

    // Extract the id from stdout
    let stdout = String::from_utf8_lossy(&add.stdout);
    let id_line = stdout
        .lines()
        .find(|l| l.contains("New Document ID:"))
        .expect("ID not found in output");
    let id = id_line.split(": ").nth(1).unwrap().trim();
    println!("   🔑 Captured ID: {id}");

    // 4. List includes it, filtered list excludes it
    let list = cli.run(&["list", "--category", "resume"]);
    assert!(list.status.success());
    let list_stdout = String::from_utf8_lossy(&list.stdout);
    assert!(list_stdout.contains("Resume A"), "List missing the document");

    let other = cli.run(&["list", "--category", "other"]);
    assert!(other.status.success());
    let other_stdout = String::from_utf8_lossy(&other.stdout);
    assert!(!other_stdout.contains("Resume A"), "Filter leaked a document");

    // 5. Show round-trips the content
    let show = cli.run(&["show", "--id", id]);
    assert!(show.status.success());
    let show_stdout = String::from_utf8_lossy(&show.stdout);
    assert!(show_stdout.contains("Resume A"));
    assert!(show_stdout.contains("work history goes here"));

    // 6. Remove refuses without --yes, then deletes
    let refused = cli.run(&["remove", "--id", id]);
    assert!(!refused.status.success(), "Remove must require --yes");

    let removed = cli.run(&["remove", "--id", id, "--yes"]);
    assert!(removed.status.success(), "Remove with --yes failed");

    let gone = cli.run(&["show", "--id", id]);
    assert!(!gone.status.success(), "Deleted document still resolves");

    println!("✅ End-to-End Test Passed!");
}
