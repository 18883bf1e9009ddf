//! Centered overlay frame shared by all dialogs.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    /// Max width of the dialog box in px.
    #[props(default = 420)]
    pub width: u32,
    /// Span the whole viewport width, ignoring `width`.
    #[props(default = false)]
    pub full_width: bool,
    pub children: Element,
}

fn box_style(width: u32, full_width: bool) -> String {
    let size = if full_width {
        "width: 100%; max-width: none; border-radius: 0;".to_string()
    } else {
        format!("width: 90%; max-width: {}px; border-radius: 8px;", width)
    };
    format!(
        "background: #fff; padding: 24px; {} box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2); text-align: center;",
        size
    )
}

#[component]
pub fn Modal(props: ModalProps) -> Element {
    let style = box_style(props.width, props.full_width);
    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); display: flex; justify-content: center; align-items: center; z-index: 1000;",
            div {
                role: "dialog",
                style: "{style}",
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_style() {
        let wide = box_style(600, false);
        assert!(wide.contains("max-width: 600px"));
        assert!(wide.contains("width: 90%"));

        let full = box_style(600, true);
        assert!(full.contains("width: 100%"));
        assert!(!full.contains("600px"));
    }
}
