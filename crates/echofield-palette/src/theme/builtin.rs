//! The built-in theme table.
//!
//! Catppuccin (Latte, Frappe, Macchiato, Mocha), Nord, Tokyo Night (Day and
//! Night) and Gruvbox (Light and Dark), mapped onto the Catppuccin role names.
//! Non-Catppuccin palettes reuse their nearest color where they have no
//! direct equivalent for a role.

use super::theme::{ColorTheme, ThemeColors};

/// Identifier of the theme used when no valid selection exists.
pub const DEFAULT_THEME_ID: &str = "macchiato";

/// Every built-in theme, in stylesheet order.
pub static BUILTIN_THEMES: &[ColorTheme] = &[
    ColorTheme {
        id: "latte",
        name: "Catppuccin Latte",
        colors: ThemeColors {
            rosewater: "#dc8a78",
            flamingo: "#dd7878",
            pink: "#ea76cb",
            mauve: "#8839ef",
            red: "#d20f39",
            maroon: "#e64553",
            peach: "#fe640b",
            yellow: "#df8e1d",
            green: "#40a02b",
            teal: "#179299",
            sky: "#04a5e5",
            sapphire: "#209fb5",
            blue: "#1e66f5",
            lavender: "#7287fd",
            text: "#4c4f69",
            subtext1: "#5c5f77",
            subtext0: "#6c6f85",
            overlay2: "#7c7f93",
            overlay1: "#8c8fa1",
            overlay0: "#9ca0b0",
            surface2: "#acb0be",
            surface1: "#bcc0cc",
            surface0: "#ccd0da",
            base: "#eff1f5",
            mantle: "#e6e9ef",
            crust: "#dce0e8",
        },
    },
    ColorTheme {
        id: "frappe",
        name: "Catppuccin Frappe",
        colors: ThemeColors {
            rosewater: "#f2d5cf",
            flamingo: "#eebebe",
            pink: "#f4b8e4",
            mauve: "#ca9ee6",
            red: "#e78284",
            maroon: "#ea999c",
            peach: "#ef9f76",
            yellow: "#e5c890",
            green: "#a6d189",
            teal: "#81c8be",
            sky: "#99d1db",
            sapphire: "#85c1dc",
            blue: "#8caaee",
            lavender: "#babbf1",
            text: "#c6d0f5",
            subtext1: "#b5bfe2",
            subtext0: "#a5adce",
            overlay2: "#949cbb",
            overlay1: "#838ba7",
            overlay0: "#737994",
            surface2: "#626880",
            surface1: "#51576d",
            surface0: "#414559",
            base: "#303446",
            mantle: "#292c3c",
            crust: "#232634",
        },
    },
    ColorTheme {
        id: "macchiato",
        name: "Catppuccin Macchiato",
        colors: ThemeColors {
            rosewater: "#f4dbd6",
            flamingo: "#f0c6c6",
            pink: "#f5bde6",
            mauve: "#c6a0f6",
            red: "#ed8796",
            maroon: "#ee99a0",
            peach: "#f5a97f",
            yellow: "#eed49f",
            green: "#a6da95",
            teal: "#8bd5ca",
            sky: "#91d7e3",
            sapphire: "#7dc4e4",
            blue: "#8aadf4",
            lavender: "#b7bdf8",
            text: "#cad3f5",
            subtext1: "#b8c0e0",
            subtext0: "#a5adcb",
            overlay2: "#939ab7",
            overlay1: "#8087a2",
            overlay0: "#6e738d",
            surface2: "#5b6078",
            surface1: "#494d64",
            surface0: "#363a4f",
            base: "#24273a",
            mantle: "#1e2030",
            crust: "#181926",
        },
    },
    ColorTheme {
        id: "mocha",
        name: "Catppuccin Mocha",
        colors: ThemeColors {
            rosewater: "#f5e0dc",
            flamingo: "#f2cdcd",
            pink: "#f5c2e7",
            mauve: "#cba6f7",
            red: "#f38ba8",
            maroon: "#eba0ac",
            peach: "#fab387",
            yellow: "#f9e2af",
            green: "#a6e3a1",
            teal: "#94e2d5",
            sky: "#89dceb",
            sapphire: "#74c7ec",
            blue: "#89b4fa",
            lavender: "#b4befe",
            text: "#cdd6f4",
            subtext1: "#bac2de",
            subtext0: "#a6adc8",
            overlay2: "#9399b2",
            overlay1: "#7f849c",
            overlay0: "#6c7086",
            surface2: "#585b70",
            surface1: "#45475a",
            surface0: "#313244",
            base: "#1e1e2e",
            mantle: "#181825",
            crust: "#11111b",
        },
    },
    ColorTheme {
        id: "nord",
        name: "Nord",
        colors: ThemeColors {
            rosewater: "#bf616a",
            flamingo: "#bf616a",
            pink: "#b48ead",
            mauve: "#b48ead",
            red: "#bf616a",
            maroon: "#bf616a",
            peach: "#d08770",
            yellow: "#ebcb8b",
            green: "#a3be8c",
            teal: "#8fbcbb",
            sky: "#88c0d0",
            sapphire: "#5e81ac",
            blue: "#5e81ac",
            lavender: "#81a1c1",
            text: "#2e3440",
            subtext1: "#3b4252",
            subtext0: "#434c5e",
            overlay2: "#4c566a",
            overlay1: "#5e81ac",
            overlay0: "#81a1c1",
            surface2: "#88c0d0",
            surface1: "#8fbcbb",
            surface0: "#d8dee9",
            base: "#eceff4",
            mantle: "#e5e9f0",
            crust: "#d8dee9",
        },
    },
    ColorTheme {
        id: "tokyo-day",
        name: "Tokyo Night Day",
        colors: ThemeColors {
            rosewater: "#c0caf5",
            flamingo: "#bb9af7",
            pink: "#bb9af7",
            mauve: "#9d7cd8",
            red: "#f7768e",
            maroon: "#f7768e",
            peach: "#ff9e64",
            yellow: "#e0af68",
            green: "#9ece6a",
            teal: "#2ac3de",
            sky: "#7dcfff",
            sapphire: "#7aa2f7",
            blue: "#7aa2f7",
            lavender: "#bb9af7",
            text: "#1a1b26",
            subtext1: "#2f3549",
            subtext0: "#414868",
            overlay2: "#565f89",
            overlay1: "#737aa2",
            overlay0: "#9aa5ce",
            surface2: "#c0caf5",
            surface1: "#c9d1f9",
            surface0: "#d5d9f0",
            base: "#e1e2e7",
            mantle: "#d5d6db",
            crust: "#c9c9d1",
        },
    },
    ColorTheme {
        id: "tokyo-night",
        name: "Tokyo Night",
        colors: ThemeColors {
            rosewater: "#c0caf5",
            flamingo: "#bb9af7",
            pink: "#bb9af7",
            mauve: "#9d7cd8",
            red: "#f7768e",
            maroon: "#f7768e",
            peach: "#ff9e64",
            yellow: "#e0af68",
            green: "#9ece6a",
            teal: "#2ac3de",
            sky: "#7dcfff",
            sapphire: "#7aa2f7",
            blue: "#7aa2f7",
            lavender: "#bb9af7",
            text: "#c0caf5",
            subtext1: "#a9b1d6",
            subtext0: "#9aa5ce",
            overlay2: "#737aa2",
            overlay1: "#565f89",
            overlay0: "#414868",
            surface2: "#2f3549",
            surface1: "#24283b",
            surface0: "#1a1b26",
            base: "#1a1b26",
            mantle: "#16161e",
            crust: "#13141a",
        },
    },
    ColorTheme {
        id: "gruvbox-light",
        name: "Gruvbox Light",
        colors: ThemeColors {
            rosewater: "#cc241d",
            flamingo: "#cc241d",
            pink: "#b16286",
            mauve: "#b16286",
            red: "#cc241d",
            maroon: "#cc241d",
            peach: "#d65d0e",
            yellow: "#d79921",
            green: "#98971a",
            teal: "#689d6a",
            sky: "#458588",
            sapphire: "#458588",
            blue: "#458588",
            lavender: "#b16286",
            text: "#3c3836",
            subtext1: "#504945",
            subtext0: "#665c54",
            overlay2: "#7c6f64",
            overlay1: "#928374",
            overlay0: "#a89984",
            surface2: "#bdae93",
            surface1: "#d5c4a1",
            surface0: "#ebdbb2",
            base: "#fbf1c7",
            mantle: "#f2e5bc",
            crust: "#ebdbb2",
        },
    },
    ColorTheme {
        id: "gruvbox-dark",
        name: "Gruvbox Dark",
        colors: ThemeColors {
            rosewater: "#fb4934",
            flamingo: "#fb4934",
            pink: "#b16286",
            mauve: "#b16286",
            red: "#fb4934",
            maroon: "#fb4934",
            peach: "#fe8019",
            yellow: "#fabd2f",
            green: "#b8bb26",
            teal: "#8ec07c",
            sky: "#83a598",
            sapphire: "#83a598",
            blue: "#83a598",
            lavender: "#b16286",
            text: "#ebdbb2",
            subtext1: "#d5c4a1",
            subtext0: "#bdae93",
            overlay2: "#a89984",
            overlay1: "#928374",
            overlay0: "#7c6f64",
            surface2: "#665c54",
            surface1: "#504945",
            surface0: "#3c3836",
            base: "#282828",
            mantle: "#1d2021",
            crust: "#1d2021",
        },
    },
];
