use maud::{html, Markup};

pub fn number_field(label: &str, name: &str, value: i64) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type="number" id=(name) name=(name) value=(value);
        }
    }
}

pub fn float_field(label: &str, name: &str, value: f64) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type="number" step="0.01" id=(name) name=(name) value=(value);
        }
    }
}

pub fn text_field(label: &str, name: &str, value: &str) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type="text" id=(name) name=(name) value=(value);
        }
    }
}

/// `options` is (value, label) pairs; `selected` matches on value.
pub fn select_field(label: &str, name: &str, options: &[(&str, &str)], selected: &str) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            select id=(name) name=(name) {
                @for (value, text) in options {
                    option value=(value) selected[*value == selected] { (text) }
                }
            }
        }
    }
}

pub fn checkbox_field(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        div class="field checkbox" {
            input type="checkbox" id=(name) name=(name) checked[checked];
            label for=(name) { (label) }
        }
    }
}
