use hackreg_core::models::{validate, HackathonDraft, UserPatch, UserProfile, ValidationError, WalletAddress};
use hackreg_core::ExperienceLevel;
use proptest::prelude::*;

// Non-blank text, so only the property under test can fail validation
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 .@:/-]{0,30}"
}

fn arb_date() -> impl Strategy<Value = String> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

prop_compose! {
    fn arb_draft()(
        name in arb_text(),
        description in arb_text(),
        start in arb_date(),
        end in arb_date(),
        deadline in arb_date(),
        location in arb_text(),
        min_team in prop::option::of(1i64..20),
        max_team in prop::option::of(1i64..20),
        organizer in arb_text(),
        email in arb_text(),
        contact in prop::option::of(arb_text()),
    ) -> HackathonDraft {
        HackathonDraft {
            name: Some(name),
            description: Some(description),
            start_date: Some(start),
            end_date: Some(end),
            registration_deadline: Some(deadline),
            location: Some(location),
            min_team_size: min_team,
            max_team_size: max_team,
            organizer_name: Some(organizer),
            organizer_email: Some(email),
            contact_number: contact,
            inhouse: None,
            outhouse: None,
            registrationlink: None,
        }
    }
}

fn arb_patch() -> impl Strategy<Value = UserPatch> {
    let level = prop::sample::select(ExperienceLevel::ALL.to_vec());
    (
        prop::option::of(prop::option::of(arb_text())),
        prop::option::of(prop::collection::vec(arb_text(), 0..4)),
        prop::option::of(prop::option::of(arb_text())),
        prop::option::of(prop::collection::vec(arb_text(), 0..4)),
        prop::option::of(prop::option::of(level)),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(name, skills, bio, interests, experience_level, looking_for_team)| UserPatch {
            name,
            skills,
            bio,
            interests,
            experience_level,
            looking_for_team,
        })
}

proptest! {
    /// Property: outhouse listings with a link always finalize and echo their fields
    #[test]
    fn prop_outhouse_with_link_succeeds(draft in arb_draft(), link in arb_text()) {
        let draft = HackathonDraft {
            outhouse: Some(true),
            registrationlink: Some(link.clone()),
            ..draft
        };
        let created = draft.clone().finalize();
        prop_assert!(created.is_ok());

        let created = created.unwrap();
        prop_assert!(!created.inhouse);
        prop_assert!(created.outhouse);
        prop_assert_eq!(created.registrationlink, link);
        prop_assert_eq!(Some(created.name), draft.name);
        prop_assert_eq!(Some(created.location), draft.location);
    }

    /// Property: inhouse && outhouse fails regardless of other fields
    #[test]
    fn prop_inhouse_and_outhouse_always_fail(draft in arb_draft(), link in prop::option::of(".*")) {
        let draft = HackathonDraft {
            inhouse: Some(true),
            outhouse: Some(true),
            registrationlink: link,
            ..draft
        };
        let errors = validate(&draft);
        let is_exclusive = |e: &ValidationError| matches!(e, ValidationError::MutuallyExclusive { .. });
        prop_assert!(errors.iter().any(is_exclusive));
        prop_assert!(draft.finalize().is_err());
    }

    /// Property: outhouse with an empty link fails
    #[test]
    fn prop_outhouse_empty_link_fails(draft in arb_draft(), blanks in "[ \t]{0,4}") {
        let draft = HackathonDraft {
            outhouse: Some(true),
            registrationlink: Some(blanks),
            ..draft
        };
        let errors = validate(&draft);
        let is_link = |e: &ValidationError| matches!(e, ValidationError::RequiredWhen { field: "registrationlink", .. });
        prop_assert!(errors.iter().any(is_link));
    }

    /// Property: validation outcome does not change when defaults are applied first
    #[test]
    fn prop_defaults_do_not_change_verdict(draft in arb_draft(), inhouse in any::<Option<bool>>(), outhouse in any::<Option<bool>>()) {
        let draft = HackathonDraft { inhouse, outhouse, ..draft };
        let mut defaulted = draft.clone();
        defaulted.apply_defaults();
        prop_assert_eq!(validate(&draft), validate(&defaulted));
    }

    /// Property: applying a profile patch twice equals applying it once
    #[test]
    fn prop_patch_is_idempotent(patch in arb_patch(), seed in arb_patch()) {
        let mut once = UserProfile::new(WalletAddress::new("0xfeed").unwrap());
        once.apply(&seed);
        once.apply(&patch);

        let mut twice = once.clone();
        twice.apply(&patch);

        prop_assert_eq!(once, twice);
    }

    /// Property: fields a patch does not name keep their prior values
    #[test]
    fn prop_patch_preserves_unnamed_fields(seed in arb_patch(), skills in prop::collection::vec(arb_text(), 0..4)) {
        let mut before = UserProfile::new(WalletAddress::new("0xfeed").unwrap());
        before.apply(&seed);

        let mut after = before.clone();
        after.apply(&UserPatch { skills: Some(skills.clone()), ..Default::default() });

        prop_assert_eq!(after.skills, skills);
        prop_assert_eq!(after.name, before.name);
        prop_assert_eq!(after.bio, before.bio);
        prop_assert_eq!(after.interests, before.interests);
        prop_assert_eq!(after.experience_level, before.experience_level);
        prop_assert_eq!(after.looking_for_team, before.looking_for_team);
    }
}
