use url::Url;

use crate::origin_policy;

/// Bootstrap script evaluated into trusted pages. Exposes the small
/// `window.jasonsGameDesktop` API the game UI and the bundled shell pages
/// call back into, and nothing else.
const BRIDGE_BOOTSTRAP_JS: &str = r#"
(() => {
  if (window.jasonsGameDesktop) return;
  const internals = window.__TAURI_INTERNALS__;
  const invoke = internals && internals.invoke ? internals.invoke.bind(internals) : null;
  if (!invoke) return;
  window.jasonsGameDesktop = Object.freeze({
    requestInstall: () => invoke('desktop_bridge_request_install'),
    getVersion: () => invoke('desktop_bridge_get_version'),
    openExternal: (url) => invoke('desktop_bridge_open_external', { url }),
  });
})();
"#;

/// The bridge goes only into pages we control: the game origin and the
/// bundled shell pages.
pub(crate) fn should_inject_desktop_bridge(game_url: &str, page_url: &Url) -> bool {
    origin_policy::is_trusted_page_url(page_url, game_url)
}

pub(crate) fn inject_desktop_bridge<F>(webview: &tauri::Webview<tauri::Wry>, log: F)
where
    F: Fn(&str),
{
    if let Err(error) = webview.eval(BRIDGE_BOOTSTRAP_JS) {
        log(&format!("Failed to inject desktop bridge script: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{should_inject_desktop_bridge, BRIDGE_BOOTSTRAP_JS};

    #[test]
    fn bridge_script_defines_the_api_exactly_once() {
        assert!(BRIDGE_BOOTSTRAP_JS.contains("window.jasonsGameDesktop"));
        assert!(BRIDGE_BOOTSTRAP_JS.contains("if (window.jasonsGameDesktop) return;"));
        assert!(BRIDGE_BOOTSTRAP_JS.contains("if (!invoke) return;"));
    }

    #[test]
    fn bridge_script_wires_every_command() {
        for command in [
            "desktop_bridge_request_install",
            "desktop_bridge_get_version",
            "desktop_bridge_open_external",
        ] {
            assert!(
                BRIDGE_BOOTSTRAP_JS.contains(command),
                "script should invoke {command}"
            );
        }
    }

    #[test]
    fn injection_is_limited_to_trusted_pages() {
        let game_url = "http://localhost:8080/";
        let game_page = Url::parse("http://localhost:8080/play").expect("parse");
        let foreign_page = Url::parse("https://example.com/").expect("parse");

        assert!(should_inject_desktop_bridge(game_url, &game_page));
        assert!(!should_inject_desktop_bridge(game_url, &foreign_page));
    }
}
