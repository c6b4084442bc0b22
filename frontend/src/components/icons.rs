//! 行内 SVG 图标
//!
//! 统一 24x24 线框风格，通过 `IconKind` 标记选择路径。

use leptos::prelude::*;

/// 图标标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Speedometer,
    User,
    MapPin,
    Building,
    Book,
    Gift,
    Star,
    Badge,
    List,
    Menu,
    LogOut,
    Plus,
    Pencil,
    Trash,
    Refresh,
    Search,
    Download,
    Lock,
    Sun,
    Moon,
}

fn path_for(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Speedometer => {
            "M10.5 6a7.5 7.5 0 107.5 7.5h-7.5V6zM13.5 3a7.5 7.5 0 017.5 7.5h-7.5V3z"
        }
        IconKind::User => {
            "M15.75 6a3.75 3.75 0 11-7.5 0 3.75 3.75 0 017.5 0zM4.5 20.1a7.5 7.5 0 0115 0A17.9 17.9 0 0112 21.75c-2.68 0-5.22-.58-7.5-1.65z"
        }
        IconKind::MapPin => {
            "M15 10.5a3 3 0 11-6 0 3 3 0 016 0zM19.5 10.5c0 7.14-7.5 11.25-7.5 11.25S4.5 17.64 4.5 10.5a7.5 7.5 0 1115 0z"
        }
        IconKind::Building => {
            "M3.75 21h16.5M4.5 3h15M5.25 3v18m13.5-18v18M9 6.75h1.5m-1.5 3h1.5m-1.5 3h1.5m3-6H15m-1.5 3H15m-1.5 3H15M9 21v-3.375c0-.621.504-1.125 1.125-1.125h3.75c.621 0 1.125.504 1.125 1.125V21"
        }
        IconKind::Book => {
            "M12 6.042A8.967 8.967 0 006 3.75c-1.052 0-2.062.18-3 .512v14.25A8.987 8.987 0 016 18c2.305 0 4.408.867 6 2.292m0-14.25a8.966 8.966 0 016-2.292c1.052 0 2.062.18 3 .512v14.25A8.987 8.987 0 0018 18a8.967 8.967 0 00-6 2.292m0-14.25v14.25"
        }
        IconKind::Gift => {
            "M21 11.25v8.25a1.5 1.5 0 01-1.5 1.5H4.5a1.5 1.5 0 01-1.5-1.5v-8.25M12 4.875A2.625 2.625 0 109.375 7.5H12m0-2.625V7.5m0-2.625A2.625 2.625 0 1114.625 7.5H12m0 0V21m-8.625-9.75h18c.621 0 1.125-.504 1.125-1.125v-1.5c0-.621-.504-1.125-1.125-1.125h-18c-.621 0-1.125.504-1.125 1.125v1.5c0 .621.504 1.125 1.125 1.125z"
        }
        IconKind::Star => {
            "M11.48 3.5c.163-.39.877-.39 1.04 0l2.125 5.11 5.518.442c.421.034.592.567.27.845l-4.204 3.602 1.285 5.385c.098.41-.35.735-.71.515L12 16.98l-4.725 2.885c-.36.22-.808-.105-.71-.515l1.285-5.385-4.204-3.602c-.322-.278-.151-.811.27-.845l5.518-.442L11.48 3.5z"
        }
        IconKind::Badge => {
            "M12 2.25l2.25 4.5 4.97.72-3.6 3.51.85 4.95L12 13.59l-4.47 2.34.85-4.95-3.6-3.51 4.97-.72L12 2.25zM8.25 15.75L7.5 21.75 12 19.5l4.5 2.25-.75-6"
        }
        IconKind::List => {
            "M8.25 6.75h12M8.25 12h12m-12 5.25h12M3.75 6.75h.007v.008H3.75V6.75zm0 5.25h.007v.008H3.75V12zm0 5.25h.007v.008H3.75v-.008z"
        }
        IconKind::Menu => "M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5",
        IconKind::LogOut => {
            "M15.75 9V5.25A2.25 2.25 0 0013.5 3h-6a2.25 2.25 0 00-2.25 2.25v13.5A2.25 2.25 0 007.5 21h6a2.25 2.25 0 002.25-2.25V15m3 0l3-3m0 0l-3-3m3 3H9"
        }
        IconKind::Plus => "M12 4.5v15m7.5-7.5h-15",
        IconKind::Pencil => {
            "M16.862 4.487l1.687-1.688a1.875 1.875 0 112.652 2.652L6.832 19.82a4.5 4.5 0 01-1.897 1.13l-2.685.8.8-2.685a4.5 4.5 0 011.13-1.897l12.682-12.68z"
        }
        IconKind::Trash => {
            "M14.74 9l-.346 9m-4.788 0L9.26 9m9.968-3.21c.342.052.682.107 1.022.166m-1.022-.165L18.16 19.67a2.25 2.25 0 01-2.244 2.077H8.084a2.25 2.25 0 01-2.244-2.077L5.772 5.79m13.456 0a48.11 48.11 0 00-3.478-.397m-12 .562c.34-.059.68-.114 1.022-.165m0 0a48.11 48.11 0 013.478-.397m7.5 0v-.916c0-1.18-.91-2.164-2.09-2.201a51.964 51.964 0 00-3.32 0c-1.18.037-2.09 1.022-2.09 2.201v.916m7.5 0a48.667 48.667 0 00-7.5 0"
        }
        IconKind::Refresh => {
            "M16.023 9.348h4.992v-.001M2.985 19.644v-4.992m0 0h4.992m-4.993 0l3.181 3.183a8.25 8.25 0 0013.803-3.7M4.031 9.865a8.25 8.25 0 0113.803-3.7l3.181 3.182m0-4.991v4.99"
        }
        IconKind::Search => {
            "M21 21l-5.197-5.197m0 0A7.5 7.5 0 105.196 5.196a7.5 7.5 0 0010.607 10.607z"
        }
        IconKind::Download => {
            "M3 16.5v2.25A2.25 2.25 0 005.25 21h13.5A2.25 2.25 0 0021 18.75V16.5M16.5 12L12 16.5m0 0L7.5 12m4.5 4.5V3"
        }
        IconKind::Lock => {
            "M16.5 10.5V6.75a4.5 4.5 0 10-9 0v3.75m-.75 11.25h10.5a2.25 2.25 0 002.25-2.25v-6.75a2.25 2.25 0 00-2.25-2.25H6.75a2.25 2.25 0 00-2.25 2.25v6.75a2.25 2.25 0 002.25 2.25z"
        }
        IconKind::Sun => {
            "M12 3v2.25m6.364.386l-1.591 1.591M21 12h-2.25m-.386 6.364l-1.591-1.591M12 18.75V21m-4.773-4.227l-1.591 1.591M5.25 12H3m4.227-4.773L5.636 5.636M15.75 12a3.75 3.75 0 11-7.5 0 3.75 3.75 0 017.5 0z"
        }
        IconKind::Moon => {
            "M21.752 15.002A9.718 9.718 0 0118 15.75c-5.385 0-9.75-4.365-9.75-9.75 0-1.33.266-2.597.748-3.752A9.753 9.753 0 003 11.25C3 16.635 7.365 21 12.75 21a9.753 9.753 0 009.002-5.998z"
        }
    }
}

/// 通用图标组件
#[component]
pub fn Icon(kind: IconKind, #[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke-width="1.8"
            stroke="currentColor"
            class=class
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=path_for(kind) />
        </svg>
    }
}
