//! Built-in link set used on first run

use crate::services::grid::Grid;
use crate::storage::{Icon, Link};

fn simple(name: &str, url: &str, icon: &str, color: &str) -> Link {
    Link::new(
        name,
        url,
        Icon::RemoteVector {
            name: icon.to_string(),
            color: Some(color.to_string()),
        },
    )
}

fn lucide(name: &str, url: &str, icon: &str, color: &str) -> Link {
    Link::new(
        name,
        url,
        Icon::PaletteVector {
            name: icon.to_string(),
            color: Some(color.to_string()),
        },
    )
}

pub fn default_grid() -> Grid {
    Grid::from_rows(vec![
        vec![
            simple("Reddit", "https://reddit.com", "reddit", "#FF4500"),
            simple("Youtube", "https://www.youtube.com/", "youtube", "#FF0000"),
            simple(
                "Marketplace",
                "https://www.facebook.com/marketplace/",
                "facebook",
                "#0866FF",
            ),
            lucide("Twitter", "https://twitter.com", "twitter", "#1DA1F2"),
        ],
        vec![
            simple("Drive", "https://drive.google.com", "googledrive", "#4285F4"),
            lucide(
                "Courses",
                "https://courses.torontomu.ca/d2l/home",
                "graduation-cap",
                "#F57C00",
            ),
            simple(
                "OneNote",
                "https://www.onenote.com",
                "microsoftonenote",
                "#7719AA",
            ),
            simple("Gmail", "https://gmail.com", "gmail", "#EA4335"),
        ],
        vec![
            simple("Github", "https://github.com", "github", "#FFFFFF"),
            lucide("AI Studio", "https://aistudio.google.com", "brain", "#4285F4"),
            lucide(
                "LocalLLaMA",
                "https://www.reddit.com/r/LocalLLaMA/",
                "cpu",
                "#FF4500",
            ),
            lucide("MonkeyType", "https://monkeytype.com", "keyboard", "#E2B714"),
        ],
        vec![
            simple("Discord", "https://discord.com/app", "discord", "#5865F2"),
            simple(
                "Hacker News",
                "https://news.ycombinator.com/",
                "ycombinator",
                "#FF6600",
            ),
            simple(
                "WSB",
                "https://www.reddit.com/r/wallstreetbets/",
                "reddit",
                "#FF4500",
            ),
            lucide(
                "Music",
                "https://musicforprogramming.net/latest/",
                "headphones",
                "#BA478F",
            ),
        ],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validate_link;

    #[test]
    fn test_default_grid_shape() {
        let grid = default_grid();
        assert_eq!(grid.row_count(), 4);
        assert!(grid.rows().iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_default_grid_passes_validation() {
        for (_, link) in default_grid().iter() {
            assert!(validate_link(link.clone().into()).is_ok(), "{}", link.name);
        }
    }
}
