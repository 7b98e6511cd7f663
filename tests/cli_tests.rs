use assert_fs::TempDir;
use std::fs;
use std::process::Command;

fn pw_io(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pw-io"));
    cmd.env("PW_IO_CONFIG", config_dir.path().join("absent.xml"));
    cmd
}

#[test]
fn print_config_reports_env_path() {
    let td = TempDir::new().unwrap();
    let out = pw_io(&td).arg("--print-config").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("PW_IO_CONFIG"), "{stdout}");
}

#[test]
fn sort_prints_natural_order() {
    let td = TempDir::new().unwrap();
    let out = pw_io(&td).args(["sort", "file10", "File2", "file1"]).output().unwrap();
    assert!(out.status.success());
    let lines: Vec<String> = String::from_utf8_lossy(&out.stdout).lines().map(str::to_owned).collect();
    assert_eq!(lines, ["file1", "File2", "file10"]);
}

#[test]
fn info_decomposes_a_file_path() {
    let td = TempDir::new().unwrap();
    let out = pw_io(&td).args(["info", "reports/q3.final.PDF"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("q3.final.PDF"));
    assert!(stdout.contains(".PDF"));
    assert!(stdout.contains("reports"));
}

#[test]
fn ls_lists_matching_files() {
    let td = TempDir::new().unwrap();
    let root = dunce::canonicalize(td.path()).unwrap();
    fs::write(root.join("keep.txt"), b"1").unwrap();
    fs::write(root.join("skip.log"), b"2").unwrap();

    let out = pw_io(&td)
        .args(["ls", root.to_str().unwrap(), "--pattern", "*.TXT"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("keep.txt"));
    assert!(!stdout.contains("skip.log"));
}

#[test]
fn wait_on_missing_file_fails() {
    let td = TempDir::new().unwrap();
    let missing = td.path().join("nowhere").join("x.bin");
    let out = pw_io(&td)
        .args(["wait", missing.to_str().unwrap(), "--timeout-ms", "100"])
        .output()
        .unwrap();
    assert!(!out.status.success());
}

#[test]
fn wait_on_free_file_succeeds() {
    let td = TempDir::new().unwrap();
    let file = td.path().join("free.bin");
    fs::write(&file, b"x").unwrap();
    let out = pw_io(&td)
        .args(["wait", file.to_str().unwrap(), "--timeout-ms", "100"])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn invalid_name_is_rejected() {
    let td = TempDir::new().unwrap();
    let file = td.path().join("a.txt");
    fs::write(&file, b"x").unwrap();
    let out = pw_io(&td).args(["rename", file.to_str().unwrap(), ".."]).output().unwrap();
    assert!(!out.status.success());
    assert!(file.exists());
}

#[test]
fn init_config_writes_once() {
    let td = TempDir::new().unwrap();
    let cfg = td.path().join("fresh").join("config.xml");
    let run = || {
        Command::new(assert_cmd::cargo::cargo_bin!("pw-io"))
            .env("PW_IO_CONFIG", &cfg)
            .arg("--init-config")
            .output()
            .unwrap()
    };
    assert!(run().status.success());
    assert!(fs::read_to_string(&cfg).unwrap().contains("<wait_timeout_ms>"));
    assert!(!run().status.success());
}
