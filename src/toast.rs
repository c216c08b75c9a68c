//! Toast notification widget configuration
//!
//! The scaffolded application ships a small browser-side script that shows
//! transient toast messages. Rather than hard-coding the container element,
//! timings and colors as globals inside the script, the widget is rendered
//! from an explicit [`ToastConfig`], so every knob the script depends on is
//! visible and testable here. The emitted script still exposes a single
//! global callable `showToast(message, type)` and expects the configured
//! container element to exist in the hosting document.

use serde::Serialize;

/// Category of a toast message
///
/// The fixed set the widget understands; each maps to a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Green confirmation toast
    Success,
    /// Red failure toast
    Error,
    /// Amber warning toast
    Warning,
    /// Blue informational toast
    Info,
}

impl ToastKind {
    /// All categories, in the order they appear in the rendered switch
    pub const ALL: [ToastKind; 4] = [
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Warning,
        ToastKind::Info,
    ];

    /// The `type` string callers pass to `showToast`
    pub fn label(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    /// Background color for this category
    pub fn color(&self) -> &'static str {
        match self {
            ToastKind::Success => "#10B981",
            ToastKind::Error => "#EF4444",
            ToastKind::Warning => "#F59E0B",
            ToastKind::Info => "#3B82F6",
        }
    }
}

/// Configuration for the rendered toast widget script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastConfig {
    /// Id of the container element toasts are appended to
    pub container_id: String,
    /// Id of the injected `<style>` element; doubles as the guard that keeps
    /// the keyframe styles from being injected twice
    pub style_id: String,
    /// How long a toast stays on screen before dismissal, in milliseconds
    pub dismiss_after_ms: u32,
    /// Slide-in animation duration in milliseconds
    pub slide_in_ms: u32,
    /// Slide-out animation duration in milliseconds
    ///
    /// Kept slightly longer than the removal delay so the element is gone
    /// before the animation ends and cannot flicker back.
    pub slide_out_ms: u32,
    /// Delay before the element is removed from the document, in milliseconds
    pub remove_delay_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            container_id: "toast-container".to_string(),
            style_id: "toast-styles".to_string(),
            dismiss_after_ms: 5000,
            slide_in_ms: 200,
            slide_out_ms: 250,
            remove_delay_ms: 200,
        }
    }
}

impl ToastConfig {
    /// Render the widget script for this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self) -> askama::Result<String> {
        crate::generator::templates::render_toast_js(self)
    }
}
