//! Mention token resolution.
//!
//! Rewrites `@name` and `#name` tokens in a draft into Discord's ID reference forms
//! (`<@USER>`, `<@&ROLE>`, `<#CHANNEL>`) when the name identifies exactly one entity in
//! the guild. Anything ambiguous or unknown stays exactly as the user typed it.

use crate::core::directory::GuildDirectory;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, info};

#[allow(clippy::expect_used)] // Literal pattern, checked by the tests below
static AT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z0-9._-]{2,32})").expect("valid @token pattern"));

#[allow(clippy::expect_used)] // Literal pattern, checked by the tests below
static HASH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([A-Za-z0-9._-]{2,100})").expect("valid #token pattern"));

/// A token may only start where the previous character is neither a word character
/// nor the sigil itself, so `me@example.com` and `@@name` are left alone.
fn starts_token(text: &str, start: usize, sigil: char) -> bool {
    match text[..start].chars().next_back() {
        Some(prev) => !(prev.is_ascii_alphanumeric() || prev == '_' || prev == sigil),
        None => true,
    }
}

fn tokens<'t>(text: &'t str, pattern: &Regex, sigil: char) -> impl Iterator<Item = Captures<'t>> {
    pattern.captures_iter(text).filter(move |caps| {
        caps.get(0)
            .is_some_and(|whole| starts_token(text, whole.start(), sigil))
    })
}

fn substitute(
    text: &str,
    pattern: &Regex,
    sigil: char,
    mut replacement: impl FnMut(&str) -> Option<String>,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in tokens(text, pattern, sigil) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if let Some(reference) = replacement(name.as_str()) {
            out.push_str(&text[last..whole.start()]);
            out.push_str(&reference);
            last = whole.end();
        }
    }
    out.push_str(&text[last..]);
    out
}

fn distinct(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for name in names {
        if !seen.iter().any(|s| s.eq_ignore_ascii_case(&name)) {
            seen.push(name);
        }
    }
    seen
}

/// Distinct `@` token names in `text`, in order of first appearance.
#[must_use]
pub fn mention_tokens(text: &str) -> Vec<String> {
    distinct(tokens(text, &AT_TOKEN, '@').map(|caps| caps[1].to_string()))
}

/// Distinct `#` token names in `text`, in order of first appearance.
#[must_use]
pub fn channel_tokens(text: &str) -> Vec<String> {
    distinct(tokens(text, &HASH_TOKEN, '#').map(|caps| caps[1].to_string()))
}

/// Resolves one `@` token: username, then display name, then role name.
fn resolve_mention<D: GuildDirectory + ?Sized>(directory: &D, token: &str) -> Option<String> {
    let by_name = directory.users_by_name(token);
    let user = match by_name.as_slice() {
        [id] => Some(*id),
        [] => {
            let by_display = directory.users_by_display_name(token);
            match by_display.as_slice() {
                [id] => Some(*id),
                [] => None,
                many => {
                    info!(
                        "Ambiguous @{token} -> {} candidates by display name; leaving as-is",
                        many.len()
                    );
                    None
                }
            }
        }
        many => {
            info!(
                "Ambiguous @{token} -> {} candidates by username; leaving as-is",
                many.len()
            );
            None
        }
    };

    if let Some(id) = user {
        return Some(format!("<@{id}>"));
    }

    match directory.roles_by_name(token).as_slice() {
        [id] => Some(format!("<@&{id}>")),
        [] => None,
        many => {
            info!(
                "Ambiguous @{token} -> {} candidates by role name; leaving as-is",
                many.len()
            );
            None
        }
    }
}

fn resolve_channel<D: GuildDirectory + ?Sized>(directory: &D, token: &str) -> Option<String> {
    match directory.text_channels_by_name(token).as_slice() {
        [id] => Some(format!("<#{id}>")),
        [] => None,
        many => {
            info!(
                "Ambiguous #{token} -> {} candidates by text channel name; leaving as-is",
                many.len()
            );
            None
        }
    }
}

/// Replaces every unambiguous `@token` and `#token` in `text` with an ID reference.
///
/// `directory` is `None` outside a guild, in which case nothing is looked up and the
/// text is returned unchanged. Mentions are substituted first; channel tokens are then
/// scanned over the already-substituted text.
#[must_use]
pub fn resolve_tokens<D: GuildDirectory + ?Sized>(text: &str, directory: Option<&D>) -> String {
    let Some(directory) = directory else {
        debug!("No guild to resolve tokens against; leaving text unchanged");
        return text.to_string();
    };
    if text.trim().is_empty() {
        return text.to_string();
    }

    let after_mentions = substitute(text, &AT_TOKEN, '@', |token| {
        resolve_mention(directory, token)
    });
    substitute(&after_mentions, &HASH_TOKEN, '#', |token| {
        resolve_channel(directory, token)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::directory::GuildSnapshot;
    use crate::test_utils::sample_guild;

    fn resolve(text: &str, guild: &GuildSnapshot) -> String {
        resolve_tokens(text, Some(guild))
    }

    #[test]
    fn test_text_without_tokens_unchanged() {
        let guild = sample_guild();
        for text in ["", "   ", "hello world", "price is 5$ (50% off!)", "a @ b # c"] {
            assert_eq!(resolve(text, &guild), text);
        }
    }

    #[test]
    fn test_outside_guild_no_lookup() {
        assert_eq!(
            resolve_tokens::<GuildSnapshot>("hi @alex in #general", None),
            "hi @alex in #general"
        );
    }

    #[test]
    fn test_single_username_match() {
        let guild = GuildSnapshot::new().with_member(1, "alex", "Alexander");
        assert_eq!(resolve("hey @alex!", &guild), "hey <@1>!");
    }

    #[test]
    fn test_username_boundary_scenario() {
        let guild = GuildSnapshot::new()
            .with_member(1, "al", "al")
            .with_member(2, "alex", "alex")
            .with_text_channel(9, "general");
        assert_eq!(
            resolve("hi @al ex and #general", &guild),
            "hi <@1> ex and <#9>"
        );
    }

    #[test]
    fn test_token_stops_at_space() {
        // `@al` is the token, `ex` is literal text; only `alex` exists so nothing matches.
        let guild = GuildSnapshot::new()
            .with_member(1, "alex", "alex")
            .with_text_channel(9, "general");
        assert_eq!(
            resolve("hi @al ex and #general", &guild),
            "hi @al ex and <#9>"
        );
    }

    #[test]
    fn test_display_name_used_when_no_username_match() {
        let guild = GuildSnapshot::new().with_member(5, "x_user_5", "Robin");
        assert_eq!(resolve("@robin ping", &guild), "<@5> ping");
    }

    #[test]
    fn test_ambiguous_display_name_left_alone() {
        let guild = GuildSnapshot::new()
            .with_member(5, "first", "Robin")
            .with_member(6, "second", "Robin");
        assert_eq!(resolve("@Robin ping", &guild), "@Robin ping");
    }

    #[test]
    fn test_username_match_wins_over_display_name() {
        let guild = GuildSnapshot::new()
            .with_member(1, "robin", "Someone")
            .with_member(2, "other", "robin");
        assert_eq!(resolve("@robin", &guild), "<@1>");
    }

    #[test]
    fn test_ambiguous_username_skips_display_name_but_tries_roles() {
        let ambiguous = GuildSnapshot::new()
            .with_member(1, "twin", "One")
            .with_member(2, "TWIN", "Two")
            .with_member(3, "third", "twin");
        assert_eq!(resolve("@twin", &ambiguous), "@twin");

        let with_role = ambiguous.with_role(40, "twin");
        assert_eq!(resolve("@twin", &with_role), "<@&40>");
    }

    #[test]
    fn test_role_fallback() {
        let guild = GuildSnapshot::new()
            .with_member(1, "alex", "alex")
            .with_role(20, "moderators");
        assert_eq!(
            resolve("calling @moderators now", &guild),
            "calling <@&20> now"
        );
    }

    #[test]
    fn test_ambiguous_role_left_alone() {
        let guild = GuildSnapshot::new()
            .with_role(20, "staff")
            .with_role(21, "Staff");
        assert_eq!(resolve("@staff", &guild), "@staff");
    }

    #[test]
    fn test_channel_match_and_ambiguity() {
        let guild = GuildSnapshot::new()
            .with_text_channel(9, "general")
            .with_text_channel(10, "memes")
            .with_text_channel(11, "MEMES");
        assert_eq!(
            resolve("see #general and #memes and #nope", &guild),
            "see <#9> and #memes and #nope"
        );
    }

    #[test]
    fn test_embedded_tokens_not_matched() {
        let guild = sample_guild();
        assert_eq!(
            resolve("mail alex@example.com or @@alex or x#general", &guild),
            "mail alex@example.com or @@alex or x#general"
        );
    }

    #[test]
    fn test_single_character_token_ignored() {
        let guild = GuildSnapshot::new()
            .with_member(1, "a", "a")
            .with_text_channel(2, "b");
        assert_eq!(resolve("@a #b", &guild), "@a #b");
    }

    #[test]
    fn test_token_punctuation_is_part_of_name() {
        let guild = GuildSnapshot::new().with_member(1, "j.doe-2", "John");
        assert_eq!(resolve("(@j.doe-2)", &guild), "(<@1>)");
    }

    #[test]
    fn test_mention_token_capped_at_32_characters() {
        let long = "a".repeat(40);
        let guild = GuildSnapshot::new().with_member(1, &"a".repeat(32), "long");
        let text = format!("@{long}");
        assert_eq!(resolve(&text, &guild), format!("<@1>{}", "a".repeat(8)));
    }

    #[test]
    fn test_repeated_token_replaced_everywhere() {
        let guild = GuildSnapshot::new().with_member(3, "kim", "Kim");
        assert_eq!(resolve("@kim @kim, @kim", &guild), "<@3> <@3>, <@3>");
    }

    #[test]
    fn test_idempotent_on_unresolvable_input() {
        let guild = sample_guild();
        let text = "hi @nobody in #nowhere, mail me@x.io";
        let once = resolve(text, &guild);
        let twice = resolve(&once, &guild);
        assert_eq!(once, text);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_non_ascii_text_preserved() {
        let guild = sample_guild();
        assert_eq!(
            resolve("größe ✨ @alex ✨ #general", &guild),
            "größe ✨ <@1> ✨ <#9>"
        );
    }

    #[test]
    fn test_token_listing() {
        let text = "@alex @Alex @bob x@hidden #general #general a#b";
        assert_eq!(mention_tokens(text), vec!["alex", "bob"]);
        assert_eq!(channel_tokens(text), vec!["general"]);
    }
}
