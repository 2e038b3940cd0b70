use emoquiz::contact::{
    validate_phone, ContactError, EMPTY_PHONE_MESSAGE, INVALID_PHONE_MESSAGE,
};
use emoquiz::content;
use emoquiz::state::{AppState, ContactFocus, Screen};
use emoquiz::toast::ToastKind;

fn contact_state() -> AppState {
    let mut state = AppState::new(content::builtin(), 0);
    state.start();
    state
}

#[test]
fn test_validate_phone_rules() {
    assert_eq!(validate_phone(""), Err(ContactError::EmptyPhoneNumber));
    assert_eq!(validate_phone("   "), Err(ContactError::EmptyPhoneNumber));
    assert_eq!(
        validate_phone("1-2-3"),
        Err(ContactError::PhoneTooShort { digits: 3 })
    );
    assert_eq!(
        validate_phone("abc"),
        Err(ContactError::PhoneTooShort { digits: 0 })
    );
    assert_eq!(validate_phone("123456").unwrap(), "123456");
    assert_eq!(validate_phone("(55) 1234-5678").unwrap(), "5512345678");
}

#[test]
fn test_each_error_has_its_own_message() {
    assert_eq!(ContactError::EmptyPhoneNumber.user_message(), EMPTY_PHONE_MESSAGE);
    assert_eq!(
        ContactError::PhoneTooShort { digits: 2 }.user_message(),
        INVALID_PHONE_MESSAGE
    );
    assert_ne!(EMPTY_PHONE_MESSAGE, INVALID_PHONE_MESSAGE);
}

#[test]
fn test_empty_submission_stays_on_contact() {
    let mut state = contact_state();
    let err = state.submit_contact().unwrap_err();
    assert_eq!(err, ContactError::EmptyPhoneNumber);
    assert_eq!(state.screen, Screen::ContactInfo);
    assert!(state.contact.is_none());

    let toast = state.toasts.last().expect("error toast");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, EMPTY_PHONE_MESSAGE);
}

#[test]
fn test_short_number_stays_on_contact() {
    let mut state = contact_state();
    state.name_input = "Ana".to_string();
    state.phone_input = "123".to_string();
    assert!(matches!(
        state.submit_contact(),
        Err(ContactError::PhoneTooShort { digits: 3 })
    ));
    assert_eq!(state.screen, Screen::ContactInfo);
    assert_eq!(state.name_input, "Ana");
    assert_eq!(state.phone_input, "123");

    let toast = state.toasts.last().expect("error toast");
    assert_eq!(toast.message, INVALID_PHONE_MESSAGE);
}

#[test]
fn test_valid_submission_starts_evaluation() {
    let mut state = contact_state();
    state.name_input = "  Ana ".to_string();
    state.phone_input = "55-1234-5678".to_string();
    state.submit_contact().unwrap();

    assert_eq!(state.screen, Screen::Evaluation);
    assert!(state.responses.is_empty());
    assert_eq!((state.current_block, state.current_question), (0, 0));

    let contact = state.contact.as_ref().unwrap();
    assert_eq!(contact.name, "Ana");
    assert_eq!(contact.phone_digits, "5512345678");
    assert_eq!(contact.full_number(), "+345512345678");
}

#[test]
fn test_selecting_country_closes_dropdown() {
    let mut state = contact_state();
    state.toggle_dropdown();
    assert!(state.dropdown.open);

    state.select_country(2);
    assert!(!state.dropdown.open);
    assert_eq!(state.selected_country, state.content.countries[2]);
}

#[test]
fn test_dismiss_keeps_country() {
    let mut state = contact_state();
    let before = state.selected_country.clone();
    state.toggle_dropdown();
    state.move_highlight(true);
    state.dismiss_dropdown();
    assert!(!state.dropdown.open);
    assert_eq!(state.selected_country, before);
}

#[test]
fn test_highlight_wraps_and_selects() {
    let mut state = contact_state();
    state.toggle_dropdown();
    assert_eq!(state.dropdown.highlighted, 0);
    state.move_highlight(false);
    let last = state.content.countries.len() - 1;
    assert_eq!(state.dropdown.highlighted, last);
    state.select_highlighted();
    assert_eq!(state.selected_country.name, "Chile");
}

#[test]
fn test_country_follows_into_contact_info() {
    let mut state = contact_state();
    state.select_country(1);
    state.phone_input = "55 1234 5678".to_string();
    state.toggle_dropdown();
    state.submit_contact().unwrap();
    assert!(!state.dropdown.open);
    assert_eq!(state.contact.unwrap().full_number(), "+525512345678");
}

#[test]
fn test_typing_goes_to_focused_field() {
    let mut state = contact_state();
    assert_eq!(state.contact_focus, ContactFocus::Name);
    state.type_char('A');
    state.focus_next();
    assert_eq!(state.contact_focus, ContactFocus::Country);
    state.type_char('x');
    state.focus_next();
    state.type_char('5');
    state.type_char('6');
    state.backspace();

    assert_eq!(state.name_input, "A");
    assert_eq!(state.phone_input, "5");

    state.focus_prev();
    state.focus_prev();
    assert_eq!(state.contact_focus, ContactFocus::Name);
    state.focus_prev();
    assert_eq!(state.contact_focus, ContactFocus::Submit);
}
