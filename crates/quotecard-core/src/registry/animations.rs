//! Entrance animations applied to the quote body.

use super::Registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    /// `animation` shorthand applied to the container, empty for none
    pub name: &'static str,
    /// `@keyframes` block referenced by `name`
    pub keyframes: &'static str,
}

pub static ANIMATIONS: Registry<Animation> = Registry::new(
    "animations",
    &[
        (
            "default",
            Animation {
                name: "",
                keyframes: "",
            },
        ),
        (
            "fade",
            Animation {
                name: "fade-in 1.5s ease-in",
                keyframes: "@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }",
            },
        ),
        (
            "grow_out_in",
            Animation {
                name: "grow-out-in 3s ease-in-out infinite",
                keyframes: "@keyframes grow-out-in { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.04); } }",
            },
        ),
        (
            "slide",
            Animation {
                name: "slide-up 1s ease-out",
                keyframes: "@keyframes slide-up { from { transform: translateY(20px); opacity: 0; } to { transform: translateY(0); opacity: 1; } }",
            },
        ),
    ],
);
