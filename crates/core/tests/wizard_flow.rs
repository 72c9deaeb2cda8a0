//! End-to-end walks through the profile wizard for each role.

use assert_matches::assert_matches;
use chrono::Weekday;

use pawlink_core::collections::breeds::TrainedBreed;
use pawlink_core::collections::schedule::{SessionType, TimeSlot};
use pawlink_core::collections::services::ServiceEdit;
use pawlink_core::model::{FacilityType, RoleDetails, TrainerDetails, VeterinarianDetails};
use pawlink_core::submission::DetailsPayload;
use pawlink_core::types::{Gender, GeoPoint, Role};
use pawlink_core::wizard::{StepOutcome, Wizard};

fn vet(w: &mut Wizard) -> &mut VeterinarianDetails {
    match &mut w.state_mut().details {
        RoleDetails::Veterinarian(d) => d,
        _ => unreachable!(),
    }
}

fn trainer(w: &mut Wizard) -> &mut TrainerDetails {
    match &mut w.state_mut().details {
        RoleDetails::Trainer(d) => d,
        _ => unreachable!(),
    }
}

fn fill_basics(w: &mut Wizard) {
    let s = w.state_mut();
    s.image = "/uploads/avatar.png".into();
    s.gender = Some(Gender::Female);
    s.set_about("Ten years of small-animal practice.");
}

fn fill_vet_professional(w: &mut Wizard) {
    let d = vet(w);
    d.title = "Dr.".into();
    d.specializations = vec!["Surgery".into()];
    d.diplomas_and_training = "DVM, ENMV Sidi Thabet".into();
    d.business_card_image = "/uploads/card.png".into();
    d.languages_spoken = vec!["Arabic".into(), "French".into()];
}

fn fill_vet_clinic(w: &mut Wizard) {
    let d = vet(w);
    d.locality.set_governorate("Tunis");
    d.locality.set_delegation("El Menzah");
    d.geolocation = Some(GeoPoint::new(36.84, 10.17));
    d.phone = "71234567".into();
    d.opening_hours.set_session(Weekday::Mon, SessionType::DoubleSession);
    d.opening_hours.set_time(Weekday::Mon, TimeSlot::Start, "08:30");
    d.opening_hours.set_time(Weekday::Mon, TimeSlot::End, "12:30");
    d.opening_hours.set_time(Weekday::Mon, TimeSlot::Start2, "14:00");
    d.opening_hours.set_time(Weekday::Mon, TimeSlot::End2, "18:00");
    d.average_consultation_duration = Some(30);
}

fn fill_vet_services(w: &mut Wizard) {
    let d = vet(w);
    d.services.update(0, ServiceEdit::Name("Consultation".into()));
    d.services.update(0, ServiceEdit::Fee(Some(35.0)));
}

// ---------------------------------------------------------------------------
// Veterinarian
// ---------------------------------------------------------------------------

#[test]
fn veterinarian_walks_all_five_steps() {
    let mut w = Wizard::new(Role::Veterinarian);

    assert_matches!(w.go_next(), StepOutcome::Blocked { .. });
    fill_basics(&mut w);
    assert_eq!(w.go_next(), StepOutcome::Moved(2));

    assert_matches!(w.go_next(), StepOutcome::Blocked { focus } if focus == "title");
    fill_vet_professional(&mut w);
    assert_eq!(w.go_next(), StepOutcome::Moved(3));

    assert_matches!(w.go_next(), StepOutcome::Blocked { .. });
    assert_eq!(w.current_step(), 3);
    fill_vet_clinic(&mut w);
    assert_eq!(w.go_next(), StepOutcome::Moved(4));

    fill_vet_services(&mut w);
    assert_eq!(w.go_next(), StepOutcome::Moved(5));

    w.state_mut().accepted_terms = true;
    let payload = w.prepare_submission().expect("complete profile should assemble");
    assert_eq!(payload.role, Role::Veterinarian);
    assert_matches!(payload.details, DetailsPayload::Veterinarian(ref v) if v.address == "Tunis, El Menzah");
}

#[test]
fn review_step_can_revisit_and_return() {
    let mut w = Wizard::new(Role::Veterinarian);
    fill_basics(&mut w);
    fill_vet_professional(&mut w);
    fill_vet_clinic(&mut w);
    fill_vet_services(&mut w);
    for _ in 0..4 {
        w.go_next();
    }
    assert!(w.is_last_step());

    assert_eq!(w.jump_to(3).unwrap(), StepOutcome::Moved(3));
    vet(&mut w).opening_hours.set_session(Weekday::Mon, SessionType::Closed);
    assert_matches!(w.go_next(), StepOutcome::Blocked { focus } if focus == "openingHours");
}

#[test]
fn submission_aggregates_errors_from_every_step() {
    let mut w = Wizard::new(Role::Veterinarian);
    fill_basics(&mut w);
    fill_vet_clinic(&mut w);
    w.state_mut().accepted_terms = true;
    // Steps 2 (professional) and 4 (services) are left empty.

    let errors = w.prepare_submission().unwrap_err();
    assert!(errors.contains_key("title"));
    assert!(errors.contains_key("services"));
    assert!(!errors.contains_key("image"));
    assert_eq!(w.errors(), &errors);
}

// ---------------------------------------------------------------------------
// Trainer
// ---------------------------------------------------------------------------

#[test]
fn mobile_trainer_profile_assembles() {
    let mut w = Wizard::new(Role::Trainer);
    fill_basics(&mut w);
    {
        let d = trainer(&mut w);
        d.certification_image = "/uploads/cert.png".into();
        d.business_card_image = "/uploads/card.png".into();
        assert!(d.breeds_trained.add(TrainedBreed::new("dog", "Labrador")));
        assert!(!d.breeds_trained.add(TrainedBreed::new("dog", "Labrador")));
        d.languages_spoken = vec!["Arabic".into()];

        d.training_facility_type = FacilityType::Mobile;
        d.service_areas.add("Nabeul");
        d.phone = "29123456".into();
        d.opening_hours.set_session(Weekday::Sat, SessionType::SingleSession);
        d.opening_hours.set_time(Weekday::Sat, TimeSlot::Start, "09:00");
        d.opening_hours.set_time(Weekday::Sat, TimeSlot::End, "13:00");
        d.average_session_duration = Some(60);

        d.services.update(0, ServiceEdit::Name("Obedience".into()));
        d.services.update(0, ServiceEdit::Fee(Some(50.0)));
    }
    for expected in 2..=5 {
        assert_eq!(w.go_next(), StepOutcome::Moved(expected));
    }
    w.state_mut().accepted_terms = true;

    let payload = w.prepare_submission().unwrap();
    let json = serde_json::to_value(&payload).unwrap();
    let details = &json["trainerDetails"];
    assert_eq!(details["breedsTrained"].as_array().unwrap().len(), 1);
    assert_eq!(details["serviceAreas"][0]["governorate"], "Nabeul");
    assert_eq!(details["openingHours"]["saturday"], "Single Session");
}

// ---------------------------------------------------------------------------
// Pet owner
// ---------------------------------------------------------------------------

#[test]
fn governorate_change_invalidates_delegation() {
    let mut w = Wizard::new(Role::PetOwner);
    fill_basics(&mut w);
    w.go_next();
    let locality = w.state_mut().locality_mut();
    locality.set_governorate("Tunis");
    locality.set_delegation("Carthage");
    locality.set_governorate("Bizerte");
    assert_eq!(w.state().locality().delegation(), "");
    assert_matches!(w.go_next(), StepOutcome::Blocked { .. });
    assert!(w.errors().contains_key("delegation"));
}
