//! Footer year stamp.

use web_sys::Element;

pub fn install(target: &Element) {
    let year = js_sys::Date::new_0().get_full_year();
    target.set_text_content(Some(&year.to_string()));
}
