use std::path::Path;
use std::process::Stdio;

use anyhow::Context;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::PdfRenderer;

const MARGIN: &str = "0.5in";

/// Shells out to the `wkhtmltopdf` executable, feeding HTML on stdin.
pub struct WkhtmltopdfRenderer {
    executable: String,
}

impl WkhtmltopdfRenderer {
    pub fn new(executable: String) -> Self {
        Self { executable }
    }

    fn args(output_path: &Path) -> Vec<std::ffi::OsString> {
        let mut args: Vec<std::ffi::OsString> = [
            "--quiet",
            "--page-size",
            "A4",
            "--margin-top",
            MARGIN,
            "--margin-right",
            MARGIN,
            "--margin-bottom",
            MARGIN,
            "--margin-left",
            MARGIN,
            "--encoding",
            "UTF-8",
            "--enable-local-file-access",
            "-",
        ]
        .iter()
        .map(|a| std::ffi::OsString::from(*a))
        .collect();
        args.push(output_path.as_os_str().to_owned());
        args
    }
}

#[async_trait]
impl PdfRenderer for WkhtmltopdfRenderer {
    async fn render(&self, html: &str, output_path: &Path) -> anyhow::Result<()> {
        let mut child = Command::new(&self.executable)
            .args(Self::args(output_path))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to launch {}", self.executable))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(html.as_bytes())
                .await
                .context("failed to stream HTML to wkhtmltopdf")?;
        }

        let output = child
            .wait_with_output()
            .await
            .context("failed waiting for wkhtmltopdf")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(status = %output.status, stderr = %stderr.trim(), "wkhtmltopdf failed");
            anyhow::bail!("wkhtmltopdf exited with {}: {}", output.status, stderr.trim());
        }

        Ok(())
    }
}
