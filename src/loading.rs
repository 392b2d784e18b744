use web_sys as web;

/// Scale the loading bar to `ratio` of its full width.
pub fn set_progress(document: &web::Document, ratio: f32) {
    if let Some(el) = document.get_element_by_id("loadingBar") {
        let ratio = ratio.clamp(0.0, 1.0);
        _ = el.set_attribute("style", &format!("transform: scaleX({ratio})"));
    }
}

/// Mark the loading page as finished; the stylesheet decides how it leaves.
pub fn finish(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("loadingPage") {
        _ = el.class_list().add_1("loaded");
    }
}
