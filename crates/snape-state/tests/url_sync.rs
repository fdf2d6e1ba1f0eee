#![allow(missing_docs)]

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use snape_model::{LonLat, Mode, Profile};
use snape_state::params::{flag_param, mode_param, profile_param, score_param};
use snape_state::{
    AddressBar, AppOptions, AppState, MemoryAddressBar, ParseError, SharedAddressBar, query_param,
};

fn address_bar(href: &str) -> (Rc<RefCell<MemoryAddressBar>>, SharedAddressBar) {
    let concrete = MemoryAddressBar::new(href).unwrap().into_shared();
    let shared: SharedAddressBar = concrete.clone();
    (concrete, shared)
}

#[test]
fn test_fresh_page_has_clean_url() {
    let (concrete, shared) = address_bar("https://example.org/severance/");
    let state = AppState::new(&shared, &AppOptions::default());

    assert_eq!(state.snapshot().mode, Mode::Title);
    assert_eq!(state.snapshot().profile, Profile::USA);
    assert_eq!(concrete.borrow().href().as_str(), "https://example.org/severance/");
    assert_eq!(concrete.borrow().history_len(), 1);
}

#[test]
fn test_restores_state_from_shared_link() {
    let (_, shared) = address_bar(
        "https://example.org/?mode=route%3A-0.1%2C51.5%3B-0.09%2C51.51&profile=SeparateWays&min_score=20&about=false",
    );
    let state = AppState::new(&shared, &AppOptions::default());
    let snapshot = state.snapshot();

    assert_eq!(
        snapshot.mode,
        Mode::Route {
            from: LonLat::new(-0.1, 51.5),
            to: LonLat::new(-0.09, 51.51),
        }
    );
    assert_eq!(snapshot.profile, Profile::SeparateWays);
    assert_eq!(snapshot.min_score, 20);
    assert_eq!(snapshot.max_score, 100);
    assert!(!snapshot.show_about);
}

#[test]
fn test_bad_params_fall_back_individually() {
    let (concrete, shared) =
        address_bar("https://example.org/?profile=France&min_score=30&max_score=lots&keep=me");
    let state = AppState::new(&shared, &AppOptions::default());

    assert_eq!(state.profile.get(), Profile::USA);
    assert_eq!(state.min_score.get(), 30);
    assert_eq!(state.max_score.get(), 100);

    let bar = concrete.borrow();
    assert_eq!(bar.param("profile"), None);
    assert_eq!(bar.param("max_score"), None);
    assert_eq!(bar.param("min_score").as_deref(), Some("30"));
    assert_eq!(bar.param("keep").as_deref(), Some("me"));
}

#[test]
fn test_sibling_writes_do_not_clobber_each_other() {
    let (concrete, shared) = address_bar("https://example.org/");
    concrete
        .borrow_mut()
        .push_state(url::Url::parse("https://example.org/?keep=me").unwrap());
    let state = AppState::new(&shared, &AppOptions::default());

    state.profile.set(Profile::SidewalksOnHighways);
    state.min_score.set(10);
    state.mode.set(Mode::Score);
    state.max_score.set(90);

    assert_eq!(
        concrete.borrow().href().as_str(),
        "https://example.org/?keep=me&profile=SidewalksOnHighways&min_score=10&mode=score&max_score=90"
    );

    state.profile.set(Profile::USA);
    assert_eq!(
        concrete.borrow().href().as_str(),
        "https://example.org/?keep=me&min_score=10&mode=score&max_score=90"
    );
    assert_eq!(concrete.borrow().history_len(), 2);
}

#[test]
fn test_url_matches_cells_after_every_change() {
    let (_, shared) = address_bar("https://example.org/");
    let state = AppState::new(&shared, &AppOptions::default());

    state.mode.set(Mode::Debug);
    state.show_about.set(false);
    state.show_about.set(true);

    let reloaded = AppState::new(&shared, &AppOptions::default());
    assert_eq!(reloaded.snapshot(), state.snapshot());
}

#[test]
fn test_non_finite_route_falls_back_to_default_mode() {
    let (concrete, shared) = address_bar("https://example.org/?mode=score&keep=me");
    let state = AppState::new(&shared, &AppOptions::default());
    assert_eq!(state.mode.get(), Mode::Score);

    state.mode.set(Mode::Route {
        from: LonLat::new(f64::NAN, 51.5),
        to: LonLat::new(-0.09, 51.51),
    });

    assert_eq!(state.mode.get(), Mode::Title);
    assert_eq!(concrete.borrow().param("mode"), None);
    assert_eq!(concrete.borrow().param("keep").as_deref(), Some("me"));
    let reloaded = AppState::new(&shared, &AppOptions::default());
    assert_eq!(reloaded.snapshot(), state.snapshot());
}

#[test]
fn test_apply_reports_errors() {
    let (_, shared) = address_bar("https://example.org/");
    let state = AppState::new(&shared, &AppOptions::default());

    state.apply("profile", "USAShoulders").unwrap();
    assert_eq!(state.profile.get(), Profile::USAShoulders);

    assert!(matches!(
        state.apply("profile", "France"),
        Err(ParseError::InvalidEnum(_))
    ));
    assert!(matches!(
        state.apply("zoom", "3"),
        Err(ParseError::UnknownParam(name)) if name == "zoom"
    ));
    assert_eq!(state.profile.get(), Profile::USAShoulders);
}

#[test]
fn test_custom_defaults_are_omitted() {
    let (concrete, shared) = address_bar("https://example.org/");
    let options = AppOptions::new()
        .with_profile(Profile::SeparateWays)
        .with_show_about(false);
    let state = AppState::new(&shared, &options);

    state.profile.set(Profile::USA);
    assert_eq!(concrete.borrow().param("profile").as_deref(), Some("USA"));
    state.profile.set(Profile::SeparateWays);
    assert_eq!(concrete.borrow().param("profile"), None);
    assert_eq!(concrete.borrow().param("about"), None);
}

fn finite_coord() -> impl Strategy<Value = f64> {
    prop_oneof![
        -180.0f64..180.0,
        Just(0.0),
        Just(-0.0),
        Just(f64::MIN_POSITIVE),
        Just(1e-300),
    ]
}

fn any_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::Title),
        Just(Mode::Score),
        Just(Mode::Debug),
        (finite_coord(), finite_coord(), finite_coord(), finite_coord()).prop_map(
            |(a, b, c, d)| Mode::Route {
                from: LonLat::new(a, b),
                to: LonLat::new(c, d),
            }
        ),
    ]
}

fn any_profile() -> impl Strategy<Value = Profile> {
    prop::sample::select(Profile::ALL.to_vec())
}

proptest! {
    #[test]
    fn mode_round_trips(mode in any_mode()) {
        let param = mode_param(Mode::Title);
        match param.stringify(&mode) {
            Some(text) => prop_assert_eq!(param.parse(&text).unwrap(), mode),
            None => prop_assert_eq!(mode, Mode::Title),
        }
    }

    #[test]
    fn profile_round_trips(profile in any_profile(), default in any_profile()) {
        let param = profile_param(default);
        match param.stringify(&profile) {
            Some(text) => prop_assert_eq!(param.parse(&text).unwrap(), profile),
            None => prop_assert_eq!(profile, default),
        }
    }

    #[test]
    fn scores_and_flags_round_trip(score in 0u32..=100, flag in any::<bool>()) {
        let scores = score_param("min_score", 0);
        if let Some(text) = scores.stringify(&score) {
            prop_assert_eq!(scores.parse(&text).unwrap(), score);
        }
        let flags = flag_param("about", true);
        if let Some(text) = flags.stringify(&flag) {
            prop_assert_eq!(flags.parse(&text).unwrap(), flag);
        }
    }

    #[test]
    fn arbitrary_params_never_escape_initialisation(
        mode in ".*",
        profile in ".*",
        score in ".*",
        about in ".*",
    ) {
        let mut url = url::Url::parse("https://example.org/").unwrap();
        url.query_pairs_mut()
            .append_pair("mode", &mode)
            .append_pair("profile", &profile)
            .append_pair("max_score", &score)
            .append_pair("about", &about);
        let (concrete, shared) = address_bar(url.as_str());
        let state = AppState::new(&shared, &AppOptions::default());

        // Whatever survived in the URL must describe the cells exactly.
        let href = concrete.borrow().href().clone();
        let reparsed = AppState::new(&shared, &AppOptions::default());
        prop_assert_eq!(reparsed.snapshot(), state.snapshot());
        prop_assert_eq!(concrete.borrow().href().clone(), href.clone());
        if let Some(raw) = query_param(&href, "profile") {
            prop_assert_eq!(raw, state.profile.get().as_str());
        }
    }
}
