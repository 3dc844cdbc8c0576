#![cfg(unix)]

use std::io::Read;
use std::process::{Command, Stdio};

#[test]
fn interrupt_on_plain_stdin_says_farewell() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mystic_quest"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    // hold stdin open so the name prompt blocks
    let _stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();

    let mut seen = Vec::new();
    let mut chunk = [0u8; 256];
    while !String::from_utf8_lossy(&seen).contains("adventurer?") {
        let read = stdout.read(&mut chunk).unwrap();
        assert!(read > 0, "game exited before asking for a name");
        seen.extend_from_slice(&chunk[..read]);
    }

    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    stdout.read_to_end(&mut seen).unwrap();
    let status = child.wait().unwrap();
    assert_eq!(status.code(), Some(0));
    assert!(String::from_utf8_lossy(&seen).contains("Game terminated by user. Thanks for playing!"));
}
