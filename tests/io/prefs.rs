// Integration tests for src/io/prefs.rs and the buffer-size setting in src/config.rs.

use std::path::{Path, PathBuf};

use kefka::config::{init_buffer_cap_from, BUFFER_CAP_DEFAULT, MIN_BUFFER_CAP};
use kefka::Prefs;

#[test]
fn default_prefs() {
    let p = Prefs::default();
    assert_eq!(p.buffer_cap, BUFFER_CAP_DEFAULT);
    assert_eq!(p.buffer_cap, 65_536);
    assert_eq!(p.temp_dir(), std::env::temp_dir());
}

#[test]
fn set_buffer_cap_never_goes_below_minimum() {
    let mut p = Prefs::new();
    for cap in 0..MIN_BUFFER_CAP {
        assert_eq!(p.set_buffer_cap(cap), MIN_BUFFER_CAP);
    }
    assert_eq!(p.set_buffer_cap(1 << 20), 1 << 20);
}

#[test]
fn temp_dir_round_trip() {
    let mut p = Prefs::new();
    p.set_temp_dir(Some(Path::new("staging")));
    assert_eq!(p.temp_dir(), PathBuf::from("staging"));
}

#[test]
fn env_buffer_size_values() {
    assert_eq!(init_buffer_cap_from(None), BUFFER_CAP_DEFAULT);
    assert_eq!(init_buffer_cap_from(Some("8192")), 8192);
    assert_eq!(init_buffer_cap_from(Some("2MB")), 2 << 20);
    assert_eq!(init_buffer_cap_from(Some("1")), MIN_BUFFER_CAP);
    assert_eq!(init_buffer_cap_from(Some("big")), BUFFER_CAP_DEFAULT);
    assert_eq!(init_buffer_cap_from(Some("10 K")), BUFFER_CAP_DEFAULT);
}
