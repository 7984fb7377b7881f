// src/format/markup.rs
// Pattern rewrites applied to advisory prose before display. The passes
// run in a fixed order and must be applied exactly once per raw message:
// re-running the pipeline on its own output double-wraps the emphasis.

use once_cell::sync::Lazy;
use regex::Regex;

static PERCENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:-\d+)?%)").unwrap());
static HEADINGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^([\w ]+:)").unwrap());
static BULLETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- ").unwrap());
static CUES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(Remember:|Note:|Important:)").unwrap());
static ACTIONS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(Bet|Call|Fold|Raise|Check)([\s:])").unwrap());

/// Rewrite raw advisory prose into display markup:
/// percentages and ranges emphasized, `Word(s):` line openers promoted to
/// sub-headings, `- ` list markers turned into bullets, cue words and
/// action words emphasized (action words only when followed by whitespace
/// or a colon, so they never match inside another word).
pub fn format_advisory(text: &str) -> String {
    let text = PERCENTS.replace_all(text, "**${1}**");
    let text = HEADINGS.replace_all(&text, "### ${1}");
    let text = BULLETS.replace_all(&text, "• ");
    let text = CUES.replace_all(&text, "**${1}**");
    ACTIONS.replace_all(&text, "**${1}**${2}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_percentages_and_ranges() {
        assert_eq!(format_advisory("bet 75% here"), "bet **75%** here");
        assert_eq!(
            format_advisory("use a 60-70% sizing"),
            "use a **60-70%** sizing"
        );
    }

    #[test]
    fn promotes_line_start_headings() {
        assert_eq!(
            format_advisory("Flop strategy: keep betting"),
            "### Flop strategy: keep betting"
        );
        // mid-line colons stay untouched
        assert_eq!(
            format_advisory("think, then act: slowly"),
            "think, then act: slowly"
        );
    }

    #[test]
    fn rewrites_list_markers() {
        assert_eq!(
            format_advisory("- small pairs\n- suited aces"),
            "• small pairs\n• suited aces"
        );
    }

    #[test]
    fn emphasizes_cue_words() {
        assert_eq!(
            format_advisory("and Remember: position matters"),
            "### and **Remember:** position matters"
        );
    }

    #[test]
    fn emphasizes_actions_followed_by_space_or_colon() {
        assert_eq!(
            format_advisory("you could Raise here, or Fold: never"),
            "you could **Raise** here, or **Fold**: never"
        );
        // no trailing whitespace or colon, no emphasis
        assert_eq!(format_advisory("just Check"), "just Check");
        // lowercase stays a plain word
        assert_eq!(format_advisory("the call is close"), "the call is close");
    }

    #[test]
    fn runs_the_passes_in_order() {
        let raw = "Turn plan: Bet 75%\n- Check: only with showdown value";
        assert_eq!(
            format_advisory(raw),
            "### Turn plan: **Bet** **75%**\n• **Check**: only with showdown value"
        );
    }

    #[test]
    fn double_application_double_wraps() {
        let once = format_advisory("bet 75% here");
        assert_ne!(format_advisory(&once), once);
    }
}
