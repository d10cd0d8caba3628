use showcase_core::{
    CatalogSession, FilterState, MemoryPreferenceStore, Project, TagVocabulary, Visibility,
};

fn two_language_catalog() -> Vec<Project> {
    serde_json::from_str(
        r#"[
            {"title":"go tool","description":"d","url":"u","tags":{"lang":["go"]}},
            {"title":"rust tool","description":"d","url":"u","tags":{"lang":["rust"]}}
        ]"#,
    )
    .unwrap()
}

fn session(projects: Vec<Project>, visibility: Visibility) -> CatalogSession<MemoryPreferenceStore> {
    CatalogSession::new(projects, visibility, MemoryPreferenceStore::new())
}

#[test]
fn selecting_only_go_shows_only_the_go_project() {
    let mut session = session(two_language_catalog(), Visibility::ListedOnly);
    session.set_selected("lang", "rust", false);

    let visible = session.visible_projects();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "go tool");
}

#[test]
fn selecting_nothing_shows_nothing() {
    let mut session = session(two_language_catalog(), Visibility::ListedOnly);
    session.select_none("lang");
    assert!(session.visible_projects().is_empty());
}

#[test]
fn selecting_every_tag_shows_everything() {
    let session = session(two_language_catalog(), Visibility::ListedOnly);
    assert_eq!(session.visible_projects().len(), 2);
}

#[test]
fn select_all_is_equivalent_to_never_constraining() {
    let baseline = session(two_language_catalog(), Visibility::ListedOnly);
    let unconstrained: Vec<String> = baseline
        .visible_projects()
        .iter()
        .map(|p| p.title.clone())
        .collect();

    let mut round_trip = session(two_language_catalog(), Visibility::ListedOnly);
    round_trip.select_none("lang");
    round_trip.select_all("lang");
    let restored: Vec<String> = round_trip
        .visible_projects()
        .iter()
        .map(|p| p.title.clone())
        .collect();

    assert_eq!(unconstrained, restored);
}

#[test]
fn hidden_projects_stay_out_of_the_pool_regardless_of_filters() {
    let mut projects = two_language_catalog();
    let secret: Project = serde_json::from_str(
        r#"{"title":"secret","description":"d","url":"u","status":"hidden",
            "tags":{"lang":["go"]}}"#,
    )
    .unwrap();
    projects.push(secret);

    let session = session(projects.clone(), Visibility::ListedOnly);
    assert_eq!(session.total_eligible(), 2);
    assert!(session
        .visible_projects()
        .iter()
        .all(|p| p.title != "secret"));

    // Hidden mode changes only the eligible pool, never predicate logic.
    let mut revealed = CatalogSession::new(
        projects,
        Visibility::IncludeHidden,
        MemoryPreferenceStore::new(),
    );
    assert_eq!(revealed.total_eligible(), 3);
    revealed.set_selected("lang", "rust", false);
    let titles: Vec<&str> = revealed
        .visible_projects()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, ["go tool", "secret"]);
}

#[test]
fn empty_tag_lists_never_constrain_the_default_view() {
    let mut projects = two_language_catalog();
    let sparse: Project = serde_json::from_str(
        r#"{"title":"sparse","description":"d","url":"u","tags":{"maturity":[]}}"#,
    )
    .unwrap();
    projects.push(sparse);

    let session = session(projects, Visibility::ListedOnly);
    // The empty "maturity" list contributes no category, so the fresh
    // all-selected state keeps the whole pool visible.
    assert!(session.vocabulary().tags("maturity").is_none());
    assert_eq!(session.visible_projects().len(), 3);
}

#[test]
fn predicate_matches_direct_state_evaluation() {
    let projects = two_language_catalog();
    let refs: Vec<&Project> = projects.iter().collect();
    let vocabulary = TagVocabulary::extract(&refs);
    let mut filters = FilterState::all_selected(&vocabulary);
    filters.set_selected("lang", "go", false);

    assert!(!showcase_core::is_visible(&projects[0], &filters));
    assert!(showcase_core::is_visible(&projects[1], &filters));
    assert_eq!(showcase_core::visible_subset(&refs, &filters).len(), 1);
}
