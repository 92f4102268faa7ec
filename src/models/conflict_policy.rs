/// What the join does when two emissions records share a canonical key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// The first record in source order wins; later duplicates are silently ignored.
    #[default]
    KeepFirst,
    /// Each duplicate overwrites the previous one.
    KeepLast,
    /// A duplicate aborts the join with `Error::DuplicateKey`.
    Reject,
}
