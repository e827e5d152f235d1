//! Startup banner.

use crate::consts::{AUTHOR, REPO};

/// What the server is about to run with.
pub struct BannerInfo<'a> {
    pub address: &'a str,
    pub model: &'a str,
    pub search: &'a str,
}

pub fn render_banner(info: &BannerInfo) -> String {
    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║           N E W S P O S T             ║
   ║     this week's news, in a post       ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   repo      {}
   listen    http://{}
   model     {}
   search    {}
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        REPO,
        info.address,
        info.model,
        info.search,
    )
}

pub fn print_banner(info: &BannerInfo) {
    println!("{}", render_banner(info));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> BannerInfo<'static> {
        BannerInfo {
            address: "0.0.0.0:8000",
            model: "gemini-2.0-flash",
            search: "tavily",
        }
    }

    #[test]
    fn banner_lists_runtime_info() {
        let banner = render_banner(&info());
        assert!(banner.contains("http://0.0.0.0:8000"));
        assert!(banner.contains("gemini-2.0-flash"));
        assert!(banner.contains("tavily"));
        assert!(banner.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn print_banner_does_not_panic() {
        print_banner(&info());
    }
}
