// Accessibility helpers

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #1B7F5B;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce a message through the checkout live region.
///
/// Writes into `#checkout-status` when it is mounted. Off the browser the
/// message only goes to the log.
pub fn set_status(msg: &str) {
    log::debug!("status: {msg}");
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(node) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id("checkout-status"))
        {
            node.set_text_content(Some(msg));
        }
    }
}

/// Inject [`visible_focus_css`] into `<head>` once.
#[cfg(target_arch = "wasm32")]
pub fn install_focus_css() {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    if doc.get_element_by_id("caixa-a11y-css").is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (doc.head(), doc.create_element("style")) else {
        return;
    };
    style.set_id("caixa-a11y-css");
    style.set_text_content(Some(visible_focus_css()));
    let _ = head.append_child(&style);
}
