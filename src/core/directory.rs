//! Guild lookups used by the token resolver.
//!
//! [`GuildDirectory`] is the lookup capability the resolver needs: every method returns
//! the IDs of all entities whose name matches, so callers can tell "no match" from
//! "ambiguous". [`GuildSnapshot`] is the in-memory implementation the bot layer fills
//! from Discord before resolving a draft.

/// Name lookups against a single guild.
///
/// All comparisons are case-insensitive. Each method returns every matching ID.
pub trait GuildDirectory {
    /// Members whose account username equals `name`.
    fn users_by_name(&self, name: &str) -> Vec<u64>;
    /// Members whose display name (nickname, global name or username) equals `name`.
    fn users_by_display_name(&self, name: &str) -> Vec<u64>;
    /// Roles named `name`.
    fn roles_by_name(&self, name: &str) -> Vec<u64>;
    /// Text channels named `name`.
    fn text_channels_by_name(&self, name: &str) -> Vec<u64>;
}

/// A guild member as far as name resolution is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberEntry {
    /// User ID
    pub id: u64,
    /// Account username
    pub username: String,
    /// Name shown in the guild
    pub display_name: String,
}

/// A role or channel: an ID and a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntry {
    /// Entity ID
    pub id: u64,
    /// Entity name
    pub name: String,
}

/// Point-in-time copy of the guild entities relevant to one draft.
#[derive(Debug, Clone, Default)]
pub struct GuildSnapshot {
    members: Vec<MemberEntry>,
    roles: Vec<NamedEntry>,
    text_channels: Vec<NamedEntry>,
}

impl GuildSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member. A member already present (same ID) is not added twice.
    pub fn add_member(&mut self, id: u64, username: &str, display_name: &str) {
        if self.members.iter().any(|m| m.id == id) {
            return;
        }
        self.members.push(MemberEntry {
            id,
            username: username.to_string(),
            display_name: display_name.to_string(),
        });
    }

    /// Adds a role.
    pub fn add_role(&mut self, id: u64, name: &str) {
        self.roles.push(NamedEntry {
            id,
            name: name.to_string(),
        });
    }

    /// Adds a text channel.
    pub fn add_text_channel(&mut self, id: u64, name: &str) {
        self.text_channels.push(NamedEntry {
            id,
            name: name.to_string(),
        });
    }

    /// Builder-style [`add_member`](Self::add_member).
    #[must_use]
    pub fn with_member(mut self, id: u64, username: &str, display_name: &str) -> Self {
        self.add_member(id, username, display_name);
        self
    }

    /// Builder-style [`add_role`](Self::add_role).
    #[must_use]
    pub fn with_role(mut self, id: u64, name: &str) -> Self {
        self.add_role(id, name);
        self
    }

    /// Builder-style [`add_text_channel`](Self::add_text_channel).
    #[must_use]
    pub fn with_text_channel(mut self, id: u64, name: &str) -> Self {
        self.add_text_channel(id, name);
        self
    }

    /// Number of members held.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

fn ids_matching<'a, T: 'a>(
    entries: impl IntoIterator<Item = &'a T>,
    name: &str,
    key: impl Fn(&T) -> &str,
    id: impl Fn(&T) -> u64,
) -> Vec<u64> {
    let wanted = name.to_lowercase();
    entries
        .into_iter()
        .filter(|&entry| key(entry).to_lowercase() == wanted)
        .map(id)
        .collect()
}

impl GuildDirectory for GuildSnapshot {
    fn users_by_name(&self, name: &str) -> Vec<u64> {
        ids_matching(&self.members, name, |m| &m.username, |m| m.id)
    }

    fn users_by_display_name(&self, name: &str) -> Vec<u64> {
        ids_matching(&self.members, name, |m| &m.display_name, |m| m.id)
    }

    fn roles_by_name(&self, name: &str) -> Vec<u64> {
        ids_matching(&self.roles, name, |r| &r.name, |r| r.id)
    }

    fn text_channels_by_name(&self, name: &str) -> Vec<u64> {
        ids_matching(&self.text_channels, name, |c| &c.name, |c| c.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_are_case_insensitive() {
        let guild = GuildSnapshot::new()
            .with_member(1, "Alex", "Lexi")
            .with_role(2, "Mods")
            .with_text_channel(3, "General");

        assert_eq!(guild.users_by_name("alex"), vec![1]);
        assert_eq!(guild.users_by_display_name("LEXI"), vec![1]);
        assert_eq!(guild.roles_by_name("mods"), vec![2]);
        assert_eq!(guild.text_channels_by_name("general"), vec![3]);
    }

    #[test]
    fn test_lookup_returns_every_match() {
        let guild = GuildSnapshot::new()
            .with_member(1, "sam", "Sam")
            .with_member(2, "samantha", "Sam");

        assert_eq!(guild.users_by_display_name("sam"), vec![1, 2]);
        assert_eq!(guild.users_by_name("sam"), vec![1]);
        assert!(guild.users_by_name("nobody").is_empty());
    }

    #[test]
    fn test_duplicate_member_ignored() {
        let mut guild = GuildSnapshot::new();
        guild.add_member(7, "dup", "dup");
        guild.add_member(7, "dup", "dup");
        assert_eq!(guild.member_count(), 1);
        assert_eq!(guild.users_by_name("dup"), vec![7]);
    }
}
