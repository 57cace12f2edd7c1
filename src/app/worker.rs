use std::sync::{Arc, Mutex};
use std::time::Instant;

use anyhow::Result;
use tokio::sync::mpsc::Receiver;

use crate::app::model::toast::ToastKind;
use crate::app::state::App;
use crate::content::{Locale, SectionId};

/// Side-effect requests emitted by the models. Navigation and locale
/// switches are intercepted by the main loop (they need the terminal
/// geometry); everything else lands here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    NavigateSection(SectionId),
    SwitchLocale(Locale),
    OpenExternal(String),
    ComposeEmail(String),
    CopyText {
        text: String,
        success: String,
        error: String,
    },
    DownloadResume,
}

pub struct Worker {
    app: Arc<Mutex<App>>,
    rx_worker: Receiver<AppMessage>,
}

impl Worker {
    pub fn new(app: Arc<Mutex<App>>, rx_worker: Receiver<AppMessage>) -> Self {
        Worker { app, rx_worker }
    }

    pub async fn run(&mut self) {
        while let Some(message) = self.rx_worker.recv().await {
            self.handle(message);
        }
    }

    /// Every failure here is swallowed into a toast; a broken clipboard or
    /// browser never takes the UI down with it.
    fn handle(&self, message: AppMessage) {
        match message {
            AppMessage::OpenExternal(url) => {
                let url = normalize_external_url(&url);
                log::info!("Opening external url: {url}");
                if let Err(e) = webbrowser::open(&url) {
                    log::error!("Failed to open {url}: {e}");
                    let error = self.with_app(|app| app.labels.palette.open_error.to_string());
                    self.toast(error, ToastKind::Error);
                }
            }
            AppMessage::ComposeEmail(address) => {
                let uri = format!("mailto:{address}");
                if let Err(e) = webbrowser::open(&uri) {
                    log::error!("Failed to open {uri}: {e}");
                    let error = self.with_app(|app| app.labels.palette.open_error.to_string());
                    self.toast(error, ToastKind::Error);
                }
            }
            AppMessage::CopyText {
                text,
                success,
                error,
            } => match copy_to_clipboard(&text) {
                Ok(()) => self.toast(success, ToastKind::Success),
                Err(e) => {
                    log::error!("Clipboard write failed: {e}");
                    self.toast(error, ToastKind::Error);
                }
            },
            AppMessage::DownloadResume => {
                let (locale, directory, done, error) = self.with_app(|app| {
                    (
                        app.locale,
                        app.config.resolved_download_dir(),
                        app.labels.palette.download_done,
                        app.labels.palette.download_error,
                    )
                });
                match crate::content::resume::ResumeData::for_locale(locale)
                    .export_to(locale, &directory)
                {
                    Ok(path) => self.toast(
                        done.replace("{path}", &path.display().to_string()),
                        ToastKind::Success,
                    ),
                    Err(e) => {
                        log::error!("CV export failed: {e}");
                        self.toast(error.to_string(), ToastKind::Error);
                    }
                }
            }
            AppMessage::NavigateSection(_) | AppMessage::SwitchLocale(_) => {
                // Handled by the main loop before messages reach the worker
                log::debug!("Ignoring main-loop message in worker: {message:?}");
            }
        }
    }

    fn with_app<T>(&self, f: impl FnOnce(&App) -> T) -> T {
        let app = self.app.lock().unwrap();
        f(&app)
    }

    fn toast(&self, message: String, kind: ToastKind) {
        let mut app = self.app.lock().unwrap();
        app.toast.show(message, kind, Instant::now());
    }
}

/// Bare domains become `https://` URLs; anything already carrying an http
/// scheme passes through untouched.
pub fn normalize_external_url(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => url.to_string(),
        _ => format!("https://{url}"),
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_is_preserved() {
        assert_eq!(
            normalize_external_url("https://github.com/javij98"),
            "https://github.com/javij98"
        );
        assert_eq!(
            normalize_external_url("http://example.com"),
            "http://example.com"
        );
    }

    #[test]
    fn bare_domains_get_https() {
        assert_eq!(
            normalize_external_url("www.linkedin.com/in/javierjimenezmolina"),
            "https://www.linkedin.com/in/javierjimenezmolina"
        );
        assert_eq!(normalize_external_url("example.com"), "https://example.com");
    }

    #[test]
    fn non_http_schemes_are_not_trusted() {
        // Mirrors the source behavior: only http(s) passes through
        assert_eq!(
            normalize_external_url("ftp://example.com"),
            "https://ftp://example.com"
        );
    }
}
