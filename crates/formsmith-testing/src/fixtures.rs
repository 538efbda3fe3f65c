//! Sample action scripts.

/// Text field followed by a select, then the text field dragged below it.
pub const TEXT_THEN_SELECT: &str = "\
add text
add select
move 0 1
";

/// One radio group with the default options.
pub const SINGLE_RADIO: &str = "add radio\n";

/// Sign-up form touching every kind of edit.
pub const SIGNUP: &str = "\
# sign-up form
add text
label 0 Full name
validate 0 required
add email
label 1 Email
validate 1 email
add select
label 2 Plan
options 2 Free\\nTeam\\nEnterprise
add checkbox
label 3 Accept terms
layout double
";

/// Script with an unknown field kind on line 2.
pub const BAD_KIND: &str = "\
add text
add password
";
