#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const USER: &str = "usuario1";
pub const PASS: &str = "senha1";

pub fn ptk() -> Command {
    cargo_bin_cmd!("prodtrack")
}

/// Isolated environment for one test: a temp data dir plus a credentials
/// file holding the standard test user.
pub struct TestEnv {
    pub dir: TempDir,
    pub data_dir: PathBuf,
    pub credentials: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let data_dir = dir.path().join("data");
        fs::create_dir_all(&data_dir).expect("create data dir");

        let credentials = dir.path().join("users.yaml");
        fs::write(&credentials, format!("{USER}: {PASS}\nusuario2: senha2\n"))
            .expect("write credentials");

        Self {
            dir,
            data_dir,
            credentials,
        }
    }

    /// Command pre-loaded with the global overrides and valid credentials.
    pub fn cmd(&self) -> Command {
        let mut c = ptk();
        c.args([
            "--data-dir",
            self.data_dir.to_str().unwrap(),
            "--credentials",
            self.credentials.to_str().unwrap(),
            "-u",
            USER,
            "-p",
            PASS,
        ]);
        c
    }

    /// Write a CSV with the standard column contract into the temp dir and
    /// return its path (used as an upload source).
    pub fn write_upload(&self, name: &str, rows: &[[&str; 6]]) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut content = String::from(
            "Protocolo,Usuário,Status,Tempo de Análise,Próximo,Carteira\n",
        );
        for row in rows {
            // quote every field so protocols with thousands separators survive
            let quoted: Vec<String> = row.iter().map(|c| format!("\"{c}\"")).collect();
            content.push_str(&quoted.join(","));
            content.push('\n');
        }
        fs::write(&path, content).expect("write upload file");
        path
    }

    /// Path of the accumulated table for the standard test user.
    pub fn table_file(&self) -> PathBuf {
        self.data_dir.join(format!("dados_acumulados_{USER}.csv"))
    }

    /// Path of the logbook for the standard test user.
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(format!("diario_bordo_{USER}.txt"))
    }
}
