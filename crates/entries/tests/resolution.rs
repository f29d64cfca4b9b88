//! Revision and locale resolution against an in-memory snapshot.

use entries::{
    available_locales, resolve_revision, ContentStore, Entry, EntryStatus, Locale, MemoryStore,
    PreviewRequest, Revision, RevisionKind, Section, Snapshot,
};

fn programme(id: u64, site: Locale) -> Entry {
    let mut entry = Entry::new(id, site, Section::FundingProgrammes, "awards-for-all");
    entry.uri = Some("funding/programmes/awards-for-all".into());
    entry.title = "Awards for All".into();
    entry
}

fn revision(revision_id: u64, entry_id: u64, kind: RevisionKind, title: &str) -> Revision {
    let mut entry = programme(entry_id, Locale::En);
    entry.uri = None;
    entry.title = title.into();
    entry.status = EntryStatus::Disabled;
    Revision {
        revision_id,
        entry_id,
        site: Locale::En,
        kind,
        entry,
    }
}

fn store() -> MemoryStore {
    MemoryStore::new(Snapshot {
        entries: vec![programme(1, Locale::En), programme(1, Locale::Cy), programme(2, Locale::En)],
        drafts: vec![
            revision(100, 1, RevisionKind::Draft, "Draft title"),
            revision(200, 2, RevisionKind::Draft, "Someone else's draft"),
        ],
        versions: vec![revision(7, 1, RevisionKind::Version, "Old title")],
    })
}

fn canonical(store: &MemoryStore, id: u64) -> Entry {
    store.find(id, Locale::En).unwrap().unwrap()
}

#[test]
fn no_preview_returns_entry_unchanged() {
    let store = store();
    let entry = canonical(&store, 1);

    let resolved = resolve_revision(&store, entry.clone(), &PreviewRequest::none()).unwrap();
    assert_eq!(resolved.entry, entry);
    assert_eq!(resolved.status, EntryStatus::Live);
}

#[test]
fn draft_is_substituted_with_canonical_path() {
    let store = store();
    let entry = canonical(&store, 1);

    let resolved = resolve_revision(&store, entry, &PreviewRequest::draft("100")).unwrap();
    assert_eq!(resolved.status, EntryStatus::Draft);
    assert_eq!(resolved.entry.title, "Draft title");
    assert_eq!(resolved.entry.uri(), "funding/programmes/awards-for-all");
}

#[test]
fn version_is_substituted() {
    let store = store();
    let resolved =
        resolve_revision(&store, canonical(&store, 1), &PreviewRequest::version("7")).unwrap();
    assert_eq!(resolved.status, EntryStatus::Version);
    assert_eq!(resolved.entry.title, "Old title");
    assert_eq!(resolved.entry.uri.as_deref(), Some("funding/programmes/awards-for-all"));
}

#[test]
fn stale_or_foreign_revision_ids_fall_back() {
    let store = store();

    for preview in [
        PreviewRequest::draft("999"),
        PreviewRequest::draft("not-a-number"),
        // Exists, but belongs to entry 2.
        PreviewRequest::draft("200"),
        // Exists as a version, not as a draft.
        PreviewRequest::draft("7"),
    ] {
        let entry = canonical(&store, 1);
        let resolved = resolve_revision(&store, entry.clone(), &preview).unwrap();
        assert_eq!(resolved.entry, entry, "preview {preview:?}");
        assert_eq!(resolved.status, EntryStatus::Live);
    }
}

#[test]
fn draft_wins_over_version() {
    let store = store();
    let preview = PreviewRequest::new(Some("100".into()), Some("7".into()));
    let resolved = resolve_revision(&store, canonical(&store, 1), &preview).unwrap();
    assert_eq!(resolved.status, EntryStatus::Draft);
}

#[test]
fn locales_include_alternate_only_when_published() {
    let store = store();

    assert_eq!(
        available_locales(&store, 1, Locale::En).unwrap(),
        vec![Locale::Cy, Locale::En]
    );
    assert_eq!(
        available_locales(&store, 1, Locale::Cy).unwrap(),
        vec![Locale::Cy, Locale::En]
    );
    assert_eq!(available_locales(&store, 2, Locale::En).unwrap(), vec![Locale::En]);
}

#[test]
fn locale_sets_are_sorted_bounded_and_contain_current() {
    let store = store();
    for id in [1, 2, 3, 404] {
        for current in Locale::ALL {
            let locales = available_locales(&store, id, current).unwrap();
            assert!(locales.contains(&current));
            assert!(locales.len() <= 2);
            assert!(locales.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}

#[test]
fn shared_revision_ids_resolve_within_the_entry_site() {
    let mut english = revision(50, 1, RevisionKind::Draft, "Contact (draft)");
    english.entry.site = Locale::En;
    let mut welsh = revision(50, 1, RevisionKind::Draft, "Cysylltu (drafft)");
    welsh.site = Locale::Cy;
    welsh.entry.site = Locale::Cy;

    let store = MemoryStore::new(Snapshot {
        entries: vec![programme(1, Locale::En), programme(1, Locale::Cy)],
        drafts: vec![english, welsh],
        versions: Vec::new(),
    });

    let entry = store.find(1, Locale::Cy).unwrap().unwrap();
    let resolved = resolve_revision(&store, entry, &PreviewRequest::draft("50")).unwrap();
    assert_eq!(resolved.status, EntryStatus::Draft);
    assert_eq!(resolved.entry.site, Locale::Cy);
    assert_eq!(resolved.entry.title, "Cysylltu (drafft)");

    let entry = store.find(1, Locale::En).unwrap().unwrap();
    let resolved = resolve_revision(&store, entry, &PreviewRequest::draft("50")).unwrap();
    assert_eq!(resolved.entry.title, "Contact (draft)");
}
