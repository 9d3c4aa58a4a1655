use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

/// `shellkit` with an isolated, empty configuration.
fn shellkit(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shellkit").unwrap();
    cmd.env("SHELLKIT_CONFIG", config_dir.join("config.toml"))
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

#[test]
fn test_hash_prints_bare_digest() {
    let tmp = tempfile::tempdir().unwrap();
    shellkit(tmp.path())
        .args(["hash", "hello world"])
        .assert()
        .success()
        .stdout("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9\n");
}

#[test]
fn test_hash_stdin_batch_as_json() {
    let tmp = tempfile::tempdir().unwrap();
    let out = shellkit(tmp.path())
        .args(["hash", "-a", "md5", "-o", "json"])
        .write_stdin("hello world\nabc\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = json(&out);
    assert_eq!(value[0]["algorithm"], "MD5");
    assert_eq!(value[0]["hash"], "5eb63bbbe01eeed093cb22bb8f5acdc3");
    assert_eq!(value[1]["input"], "abc");
    assert_eq!(value[1]["hash"], "900150983cd24fb0d6963f7d28e17f72");
}

#[test]
fn test_unknown_selector_rejected_before_dispatch() {
    let tmp = tempfile::tempdir().unwrap();
    shellkit(tmp.path())
        .args(["hash", "-a", "crc32", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("crc32"));
}

#[test]
fn test_base64_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    shellkit(tmp.path())
        .args(["base64", "hello"])
        .assert()
        .success()
        .stdout("aGVsbG8=\n");

    shellkit(tmp.path())
        .args(["base64", "--decode", "-"])
        .write_stdin("aGVsbG8=\n")
        .assert()
        .success()
        .stdout("hello\n");

    shellkit(tmp.path())
        .args(["base64", "-e", "utf16le", "dir"])
        .assert()
        .success()
        .stdout("ZABpAHIA\n");
}

#[test]
fn test_failed_item_does_not_stop_batch() {
    let tmp = tempfile::tempdir().unwrap();
    shellkit(tmp.path())
        .args(["base64", "--decode", "not base64!", "aGVsbG8="])
        .assert()
        .code(1)
        .stdout("hello\n")
        .stderr(predicate::str::contains("Error: not base64!:"));
}

#[test]
fn test_doc_ip_v4_prefixes() {
    let tmp = tempfile::tempdir().unwrap();
    let out = shellkit(tmp.path())
        .args(["doc-ip", "-c", "25"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 25);
    for line in text.lines() {
        assert!(
            ["192.0.2.", "198.51.100.", "203.0.113."]
                .iter()
                .any(|p| line.starts_with(p)),
            "{line}"
        );
    }
}

#[test]
fn test_doc_ip_v6_prefix() {
    let tmp = tempfile::tempdir().unwrap();
    shellkit(tmp.path())
        .args(["doc-ip", "--version", "6"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2001:0DB8:"));
}

#[test]
fn test_doc_phone_uses_configured_area_codes() {
    let tmp = tempfile::tempdir().unwrap();
    shellkit(tmp.path())
        .args(["config", "set", "area_codes", "212"])
        .assert()
        .success();

    let out = shellkit(tmp.path())
        .args(["doc-phone", "-f", "dotted", "-c", "10"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    let pattern = predicate::str::is_match(r"^212\.555\.01\d\d$").unwrap();
    for line in text.lines() {
        assert!(pattern.eval(line), "{line}");
    }
}

#[test]
fn test_sri_for_script_file() {
    let tmp = tempfile::tempdir().unwrap();
    let script = tmp.path().join("app.js");
    std::fs::write(&script, "alert('Hello, world.');").unwrap();

    let out = shellkit(tmp.path())
        .args(["sri", "-o", "json"])
        .arg(&script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = json(&out);
    assert_eq!(
        value[0]["integrity"],
        "sha384-H8BRh8j48O9oYatfu5AZzq6A9RINhZO5H16dQZngK7T62em8MUt1FLm52t+eX6xO"
    );
    assert!(value[0]["tag"].as_str().unwrap().starts_with("<script src="));
}

#[test]
fn test_sri_missing_file() {
    let tmp = tempfile::tempdir().unwrap();
    shellkit(tmp.path())
        .args(["sri", "does-not-exist.css"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist.css"));
}

#[test]
fn test_port_open_and_closed() {
    let tmp = tempfile::tempdir().unwrap();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let open_port = listener.local_addr().unwrap().port();
    let closed_port = {
        let temp = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        temp.local_addr().unwrap().port()
    };

    let out = shellkit(tmp.path())
        .args(["port", "127.0.0.1", "-o", "json", "-t", "1000"])
        .args(["-p", &open_port.to_string(), "-p", &closed_port.to_string()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = json(&out);
    assert_eq!(value[0]["protocol"], "TCP");
    assert_eq!(value[0]["open"], true);
    assert_eq!(value[1]["open"], false);
    drop(listener);
}

#[test]
fn test_random_without_opening() {
    let tmp = tempfile::tempdir().unwrap();
    let media = tmp.path().join("media");
    std::fs::create_dir_all(media.join("shows")).unwrap();
    for name in ["a.mp4", "b.mkv", "notes.txt"] {
        std::fs::write(media.join("shows").join(name), b"x").unwrap();
    }

    let out = shellkit(tmp.path())
        .args(["random", "--no-open", "-c", "video", "-n", "2", "-o", "json", "-d"])
        .arg(&media)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = json(&out);
    let picks: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["path"].as_str().unwrap())
        .collect();
    assert_eq!(picks.len(), 2);
    assert!(picks.iter().all(|p| p.ends_with(".mp4") || p.ends_with(".mkv")));
    assert!(media.join("video-cache.txt").exists());
}

#[test]
fn test_random_too_many_requested() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("song.mp3"), b"x").unwrap();

    shellkit(tmp.path())
        .args(["random", "--no-open", "-c", "audio", "-n", "3", "-d"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("only 1 available"));
}

#[test]
fn test_help_md_from_stdin() {
    let tmp = tempfile::tempdir().unwrap();
    shellkit(tmp.path())
        .arg("help-md")
        .write_stdin("Usage: tool [OPTIONS]\n\nOptions:\n  -h, --help  Print help\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# tool\n"))
        .stdout(predicate::str::contains("- `-h, --help`: Print help"));
}

#[test]
fn test_ratio_of_wav() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("tone.wav");

    // 8 kHz mono 16-bit PCM, two seconds of silence
    let data_len: u32 = 8000 * 2 * 2;
    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVEfmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&8000u32.to_le_bytes());
    wav.extend_from_slice(&16000u32.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.resize(wav.len() + data_len as usize, 0);
    std::fs::write(&path, &wav).unwrap();

    let out = shellkit(tmp.path())
        .args(["ratio", "-o", "json"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = json(&out);
    assert_eq!(value[0]["name"], "tone.wav");
    assert_eq!(value[0]["duration_secs"], 2.0);
}

#[test]
fn test_props_selects_by_index() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("hello.txt");
    std::fs::write(&path, "hello").unwrap();

    let out = shellkit(tmp.path())
        .args(["props", "-i", "0", "-i", "1", "-o", "json"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = json(&out);
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["name"], "Name");
    assert_eq!(value[0]["value"], "hello.txt");
    assert_eq!(value[1]["value"], "5 bytes");
}

#[test]
fn test_browse_private_needs_named_browser() {
    let tmp = tempfile::tempdir().unwrap();
    shellkit(tmp.path())
        .args(["browse", "--private", "example.com"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--private"));
}

#[test]
fn test_config_set_show_path() {
    let tmp = tempfile::tempdir().unwrap();

    shellkit(tmp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    shellkit(tmp.path())
        .args(["config", "set", "hash_algorithm", "sha1"])
        .assert()
        .success();

    shellkit(tmp.path())
        .args(["config", "set", "nonsense", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));

    let out = shellkit(tmp.path())
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(json(&out)["hash_algorithm"], "SHA1");

    // The configured default now applies
    shellkit(tmp.path())
        .args(["hash", "abc"])
        .assert()
        .success()
        .stdout("a9993e364706816aba3e25717850c26c9cd0d89d\n");
}
