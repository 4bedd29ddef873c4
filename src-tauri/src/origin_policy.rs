use url::Url;

use crate::webui_paths;

/// Whether a page loaded in the main window belongs to us: either one of
/// the bundled shell pages or the same origin the game is served from.
/// Only trusted pages get the desktop bridge injected.
pub(crate) fn is_trusted_page_url(page: &Url, game_url: &str) -> bool {
    if webui_paths::is_shell_page_url(page) {
        return true;
    }
    match Url::parse(game_url) {
        Ok(game) => same_origin(page, &game),
        Err(_) => false,
    }
}

fn same_origin(left: &Url, right: &Url) -> bool {
    left.scheme() == right.scheme()
        && left.host_str() == right.host_str()
        && left.port_or_known_default() == right.port_or_known_default()
}
