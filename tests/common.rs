#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rshuttle::models::{RosterRow, StationFlags, StationId};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Header plus five riders, quoted the way the spreadsheet export quotes them.
pub const ROSTER_CSV: &str = r#""STT","MSNV","Họ và tên","S1","S2","S3","S4","S5","S6","C1","C2","C3","C4","C5","C6"
"1","NV001","Nguyễn Văn Anh","1","0","0","0","0","0","0","0","0","0","0","1"
"2","NV002","Trần Thị Bích","0","1","0","0","0","0","0","1","0","0","0","0"
"3","NV003","Lê Đức Dũng","0","0","0","0","0","0","1","0","0","0","0","0"
"4","NV004","Phạm Minh Châu","0","0","1","0","0","0","0","0","0","0","0","0"
"5","NV005","Đỗ Hoàng Nam","0","0","0","0","0","0","0","0","0","0","0","0"
"#;

pub fn rsh(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rshuttle");
    cmd.env("HOME", home).env("APPDATA", home).env_remove("RUST_LOG");
    cmd
}

/// Fresh directory inside the system temp dir, used as HOME for one test.
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rshuttle_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Write `content` as a roster file inside `dir` and return its path.
pub fn write_roster(dir: &Path, content: &str) -> String {
    let path = dir.join("roster.csv");
    fs::write(&path, content).expect("write roster fixture");
    path.to_string_lossy().to_string()
}

pub fn flags(stations: &[StationId]) -> StationFlags {
    let mut f = StationFlags::default();
    for s in stations {
        f.set(*s, true);
    }
    f
}

pub fn row(index: &str, name: &str, morning: &[StationId], evening: &[StationId]) -> RosterRow {
    RosterRow::new(index, format!("NV{index}"), name, flags(morning), flags(evening))
}

pub fn indexes(rows: &[&RosterRow]) -> Vec<String> {
    rows.iter().map(|r| r.row_index.clone()).collect()
}
