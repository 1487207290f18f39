//! Schemas for every intake form, shared by the client and the server

use super::rules::{is_email, CrossFieldRule};
use super::schema::{Choice, Field, InputKind, Schema};
use once_cell::sync::Lazy;
use std::sync::Arc;

pub const MAX_DONATION_MESSAGE: &str = "For donations over $100,000, please contact us";

// ============================================
// Common fields
// ============================================

pub fn name_field(name: &'static str, label: &'static str) -> Field {
    Field::text(name, label)
        .required("Name is required")
        .min_len(2, "Name must be at least 2 characters")
        .max_len(100, "Name must be less than 100 characters")
}

pub fn email_field(name: &'static str, label: &'static str) -> Field {
    Field::new(name, label, InputKind::Email)
        .required("Email is required")
        .email("Please enter a valid email address")
}

pub fn phone_field(name: &'static str, label: &'static str) -> Field {
    Field::new(name, label, InputKind::Phone)
        .required("Phone number is required")
        .phone("Please enter a valid phone number")
}

pub fn phone_optional(name: &'static str, label: &'static str) -> Field {
    Field::new(name, label, InputKind::Phone).phone("Please enter a valid phone number")
}

pub fn message_field(name: &'static str, label: &'static str) -> Field {
    Field::textarea(name, label)
        .required("Message is required")
        .min_len(10, "Please provide more detail (at least 10 characters)")
        .max_len(5000, "Message must be less than 5000 characters")
}

pub fn message_optional(name: &'static str, label: &'static str) -> Field {
    Field::textarea(name, label).max_len(5000, "Message must be less than 5000 characters")
}

fn amount_field(name: &'static str, label: &'static str, message: &str) -> Field {
    Field::number(name, label).required(message).type_message(message)
}

// ============================================
// Choices
// ============================================

pub const PET_SPECIES: &[Choice] = &[("cat", "Cat"), ("dog", "Dog"), ("other", "Other")];

pub const CONTACT_REASONS: &[Choice] = &[
    ("general", "General Inquiry"),
    ("volunteer", "Volunteering Question"),
    ("partnership", "Partnership / Sponsorship"),
    ("resource", "Suggest a Resource"),
    ("report", "Report an Issue"),
    ("media", "Media / Press"),
    ("other", "Other"),
];

pub const VOLUNTEER_ROLES: &[Choice] = &[
    ("colony-feeder", "Colony Feeder"),
    ("tnr-helper", "TNR Volunteer"),
    ("foster", "Foster Parent"),
    ("transport", "Transport Driver"),
    ("events", "Event Volunteer"),
    ("admin", "Admin Support"),
];

pub const FOSTER_TYPES: &[Choice] = &[
    ("short-term", "Short-Term Foster"),
    ("medical", "Medical Foster"),
    ("socialization", "Socialization Foster"),
    ("bottle-baby", "Bottle Baby Foster"),
    ("hospice", "Hospice Foster"),
];

pub const OTHER_PETS: &[Choice] = &[
    ("none", "No pets"),
    ("dogs", "Dogs only"),
    ("cats", "Cats only"),
    ("both", "Dogs and cats"),
    ("other", "Other pets"),
];

pub const KIDS: &[Choice] = &[
    ("none", "No children"),
    ("under5", "Under 5 years"),
    ("5to12", "5-12 years"),
    ("teens", "Teenagers"),
];

pub const HOUSING: &[Choice] = &[
    ("house-owned", "House (owned)"),
    ("house-rented", "House (rented)"),
    ("apartment", "Apartment"),
    ("condo", "Condo/Townhouse"),
];

pub const TNR_STATUS: &[Choice] = &[
    ("all", "All cats fixed"),
    ("partial", "Some cats fixed"),
    ("none", "No cats fixed"),
    ("unknown", "Unknown"),
];

pub const SUBMITTER_RELATION: &[Choice] = &[
    ("observer", "I've seen the cats"),
    ("caretaker", "I feed or care for them"),
    ("neighbor", "Neighbor"),
    ("property-owner", "Property owner"),
    ("other", "Other"),
];

pub const URGENT_NEEDS: &[Choice] = &[
    ("tnr-needed", "TNR needed (unfixed cats)"),
    ("food-needed", "Regular food supply needed"),
    ("medical", "Cats need medical attention"),
    ("shelter", "Weather shelter needed"),
    ("caretaker", "Looking for caretaker"),
    ("threatened", "Colony threatened (construction, complaints)"),
];

pub const SURRENDER_REASONS: &[Choice] = &[
    ("housing", "Housing issues"),
    ("financial", "Can't afford pet care"),
    ("behavioral", "Behavioral problems"),
    ("allergies", "Allergies in the family"),
    ("health", "Owner health issues"),
    ("time", "Not enough time for the pet"),
    ("new-baby", "New baby/family changes"),
    ("other", "Other reason"),
];

pub const SURRENDER_TIMELINE: &[Choice] = &[
    ("urgent", "Urgent (days)"),
    ("soon", "Within 2 weeks"),
    ("month", "Within a month"),
    ("flexible", "Flexible / exploring options"),
];

pub const LOST_OR_FOUND: &[Choice] = &[("lost", "Lost"), ("found", "Found")];

pub const DONATION_INTERVALS: &[Choice] = &[("month", "Monthly"), ("year", "Yearly")];

pub const TRIBUTE_TYPES: &[Choice] = &[("memorial", "In memory of"), ("honor", "In honor of")];

pub const HONOREE_TYPES: &[Choice] = &[("pet", "A pet"), ("person", "A person")];

pub const SPONSOR_TIERS: &[Choice] = &[
    ("bronze", "Bronze ($100/mo)"),
    ("silver", "Silver ($250/mo)"),
    ("gold", "Gold ($500/mo)"),
    ("platinum", "Platinum ($1000/mo)"),
];

pub const SPONSOR_INTERESTS: &[Choice] = &[
    ("events", "Event sponsorship"),
    ("tnr", "TNR program support"),
    ("food", "Food station sponsorship"),
    ("volunteering", "Employee volunteering"),
    ("matching", "Matching gifts"),
];

// ============================================
// Form schemas
// ============================================

pub static CONTACT: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        Schema::new()
            .field(name_field("name", "Name"))
            .field(email_field("email", "Email"))
            .field(Field::select("reason", "Reason", CONTACT_REASONS).open_choices())
            .field(message_field("message", "Message")),
    )
});

pub static VOLUNTEER: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        Schema::new()
            .field(name_field("name", "Name"))
            .field(email_field("email", "Email"))
            .field(phone_optional("phone", "Phone"))
            .field(
                Field::multi_select("roles", "Roles", VOLUNTEER_ROLES)
                    .required("Please select at least one role")
                    .min_items(1, "Please select at least one role"),
            )
            .field(Field::textarea("experience", "Experience"))
            .field(Field::text("availability", "Availability"))
            .field(Field::checkbox("hasVehicle", "I have a vehicle"))
            .field(Field::checkbox("canFoster", "I can foster"))
            .field(Field::textarea("message", "Anything else?"))
            .field(Field::text("howHeard", "How did you hear about us?")),
    )
});

pub static FOSTER: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        Schema::new()
            .field(name_field("name", "Name"))
            .field(email_field("email", "Email"))
            .field(phone_field("phone", "Phone"))
            .field(
                Field::multi_select("fosterTypes", "Foster types", FOSTER_TYPES)
                    .required("Please select at least one foster type")
                    .min_items(1, "Please select at least one foster type"),
            )
            .field(Field::select("hasOtherPets", "Other pets", OTHER_PETS))
            .field(Field::select("hasKids", "Children at home", KIDS))
            .field(Field::select("housingType", "Housing", HOUSING))
            .field(Field::textarea("experience", "Experience"))
            .field(Field::textarea("whyFoster", "Why do you want to foster?")),
    )
});

pub static COLONY_SUBMISSION: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        Schema::new()
            .field(Field::text("colonyName", "Colony name"))
            .field(
                Field::textarea("locationDescription", "Location description")
                    .required("Location description is required"),
            )
            .field(Field::text("address", "Address"))
            .field(
                Field::number("latitude", "Latitude")
                    .min(-90.0, "Invalid latitude")
                    .max(90.0, "Invalid latitude"),
            )
            .field(
                Field::number("longitude", "Longitude")
                    .min(-180.0, "Invalid longitude")
                    .max(180.0, "Invalid longitude"),
            )
            .field(
                amount_field("estimatedCats", "Estimated number of cats", "Please enter a number")
                    .min(1.0, "Must be at least 1 cat")
                    .max(500.0, "For very large colonies, please contact us directly"),
            )
            .field(Field::select("tnrStatus", "TNR status", TNR_STATUS))
            .field(Field::checkbox("hasCaretaker", "Someone already cares for them"))
            .field(Field::text("caretakerContact", "Caretaker contact"))
            .field(Field::text("feedingSchedule", "Feeding schedule"))
            .field(Field::multi_select("urgentNeeds", "Urgent needs", URGENT_NEEDS))
            .field(Field::textarea("additionalInfo", "Additional info"))
            .field(name_field("submitterName", "Your name"))
            .field(email_field("submitterEmail", "Your email"))
            .field(phone_optional("submitterPhone", "Your phone"))
            .field(Field::select(
                "submitterRelation",
                "Your relation to the colony",
                SUBMITTER_RELATION,
            )),
    )
});

pub static DEPOSIT_ASSISTANCE: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        Schema::new()
            .field(name_field("name", "Name"))
            .field(email_field("email", "Email"))
            .field(phone_field("phone", "Phone"))
            .field(Field::text("petName", "Pet name").required("Pet name is required"))
            .field(
                Field::select("petSpecies", "Pet type", PET_SPECIES)
                    .required("Please select pet type"),
            )
            .field(
                Field::text("landlordName", "Landlord / property manager")
                    .required("Landlord/property manager name is required"),
            )
            .field(
                amount_field("depositAmount", "Deposit amount ($)", "Please enter a valid amount")
                    .min(50.0, "Minimum request is $50")
                    .max(2000.0, "Maximum request is $2,000"),
            )
            .field(
                Field::number("monthlyIncome", "Monthly income ($)")
                    .type_message("Please enter your monthly income")
                    .min(0.0, "Income cannot be negative"),
            )
            .field(message_field("situation", "Your situation"))
            .field(Field::checkbox("canRepay", "I can repay part of the deposit")),
    )
});

pub static SURRENDER_PREVENTION: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        Schema::new()
            .field(name_field("name", "Name"))
            .field(email_field("email", "Email"))
            .field(phone_optional("phone", "Phone"))
            .field(
                Field::textarea("petInfo", "About your pet(s)")
                    .required("Please describe your pet(s)"),
            )
            .field(
                Field::multi_select("reasons", "Reasons", SURRENDER_REASONS)
                    .required("Please select at least one reason")
                    .min_items(1, "Please select at least one reason"),
            )
            .field(Field::text("otherReason", "Other reason"))
            .field(
                Field::radio("timeline", "Timeline", SURRENDER_TIMELINE)
                    .required("Please select a timeline"),
            )
            .field(Field::textarea("whatWouldHelp", "What would help?"))
            .field(Field::textarea("triedOptions", "What have you tried?")),
    )
});

pub static VET_FUND: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        Schema::new()
            .field(name_field("name", "Name"))
            .field(email_field("email", "Email"))
            .field(phone_field("phone", "Phone"))
            .field(Field::text("petName", "Pet name").required("Pet name is required"))
            .field(
                Field::select("petSpecies", "Pet type", PET_SPECIES)
                    .required("Please select pet type")
                    .default_value("dog"),
            )
            .field(Field::text("petAge", "Pet age"))
            .field(
                Field::text("vetClinic", "Vet clinic").required("Vet clinic name is required"),
            )
            .field(
                Field::textarea("diagnosis", "Diagnosis")
                    .required("Please describe the diagnosis"),
            )
            .field(
                amount_field("estimatedCost", "Estimated cost ($)", "Please enter the estimated cost")
                    .min(50.0, "Minimum request is $50")
                    .max(
                        5000.0,
                        "Maximum request is $5,000. For higher amounts, please contact us.",
                    ),
            )
            .field(Field::checkbox("isEmergency", "This is an emergency"))
            .field(message_field("situation", "Why do you need assistance?"))
            .field(Field::checkbox("hasAppliedElsewhere", "I have applied elsewhere"))
            .field(Field::text("otherFunding", "Other funding"))
            .field(Field::checkbox(
                "proofOfIncome",
                "I can provide proof of income/hardship if requested",
            ))
            .field(Field::checkbox("agreedToTerms", "I agree to the fund terms")),
    )
});

pub static LOST_FOUND: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        Schema::new()
            .field(
                Field::radio("type", "Lost or found", LOST_OR_FOUND)
                    .required("Please select lost or found"),
            )
            .field(
                Field::select("species", "Animal type", PET_SPECIES)
                    .required("Please select the animal type"),
            )
            .field(Field::text("breed", "Breed"))
            .field(Field::text("color", "Color/markings").required("Color/markings are required"))
            .field(Field::text("name", "Pet name"))
            .field(message_field("description", "Description"))
            .field(Field::text("location", "Last seen location").required("Location is required"))
            .field(Field::text("date", "Date (YYYY-MM-DD)").required("Date is required"))
            .field(name_field("contactName", "Your name"))
            .field(phone_field("contactPhone", "Your phone"))
            .field(email_field("contactEmail", "Your email"))
            .field(Field::text("microchipId", "Microchip ID")),
    )
});

fn recurring_without_interval(values: &super::FormValues) -> bool {
    values.flag("isRecurring") && !matches!(values.text("interval"), "month" | "year")
}

pub static DONATION: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        Schema::new()
            .field(
                amount_field("amount", "Amount ($)", "Please enter a valid amount")
                    .min(1.0, "Minimum donation is $1")
                    .max(100_000.0, MAX_DONATION_MESSAGE),
            )
            .field(email_field("email", "Email"))
            .field(Field::text("name", "Name"))
            .field(Field::checkbox("isAnonymous", "Give anonymously"))
            .field(Field::checkbox("coverFees", "Cover processing fees"))
            .field(message_optional("message", "Message"))
            .field(Field::text("campaignId", "Campaign"))
            .field(Field::checkbox("isRecurring", "Make this recurring"))
            .field(Field::select("interval", "Interval", DONATION_INTERVALS))
            .cross_rule(CrossFieldRule::new(
                "interval",
                "Please choose monthly or yearly",
                recurring_without_interval,
            )),
    )
});

fn notify_without_recipient(values: &super::FormValues) -> bool {
    values.flag("notifyRecipient") && !is_email(values.text("recipientEmail"))
}

pub static TRIBUTE_DONATION: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        Schema::new()
            .field(
                Field::radio("tributeType", "Tribute type", TRIBUTE_TYPES)
                    .required("Please select tribute type"),
            )
            .field(
                Field::radio("honoreeType", "Honoring", HONOREE_TYPES)
                    .required("Please select who you're honoring"),
            )
            .field(Field::text("honoreeName", "Honoree name").required("Please enter a name"))
            .field(message_optional("message", "Tribute message"))
            .field(Field::checkbox("notifyRecipient", "Notify someone of this gift"))
            .field(Field::text("recipientName", "Recipient name"))
            .field(
                Field::new("recipientEmail", "Recipient email", InputKind::Email)
                    .email("Please enter a valid email"),
            )
            .field(name_field("donorName", "Your name"))
            .field(email_field("donorEmail", "Your email"))
            .field(
                amount_field("amount", "Amount ($)", "Please enter a valid amount")
                    .min(5.0, "Minimum tribute donation is $5")
                    .max(100_000.0, MAX_DONATION_MESSAGE),
            )
            .field(Field::checkbox("isAnonymous", "Give anonymously"))
            .cross_rule(CrossFieldRule::new(
                "recipientEmail",
                "Recipient email is required to send a notification",
                notify_without_recipient,
            )),
    )
});

pub static SPONSOR_INQUIRY: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        Schema::new()
            .field(
                Field::text("companyName", "Company name").required("Company name is required"),
            )
            .field(name_field("contactName", "Contact name"))
            .field(email_field("contactEmail", "Contact email"))
            .field(phone_optional("contactPhone", "Contact phone"))
            .field(Field::select("tier", "Sponsorship tier", SPONSOR_TIERS))
            .field(Field::multi_select("interests", "Interests", SPONSOR_INTERESTS))
            .field(message_optional("message", "Message")),
    )
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FormValues;
    use pretty_assertions::assert_eq;

    fn valid_colony() -> FormValues {
        let mut values = COLONY_SUBMISSION.defaults();
        values.set("locationDescription", "Behind the grocery on 5th");
        values.set("estimatedCats", 12);
        values.set("submitterName", "Jane Doe");
        values.set("submitterEmail", "jane@example.com");
        values
    }

    fn valid_deposit() -> FormValues {
        let mut values = DEPOSIT_ASSISTANCE.defaults();
        values.set("name", "Sam Rivera");
        values.set("email", "sam@example.com");
        values.set("phone", "512-555-0100");
        values.set("petName", "Biscuit");
        values.set("petSpecies", "dog");
        values.set("landlordName", "Oak Street Apartments");
        values.set("depositAmount", 300);
        values.set("situation", "Moving to a new apartment that requires a pet deposit.");
        values
    }

    mod presets {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_name_preset_messages() {
            let field = name_field("name", "Name");
            assert_eq!(
                field.validate(&"".into()),
                Some("Name is required".to_string())
            );
            assert_eq!(
                field.validate(&"J".into()),
                Some("Name must be at least 2 characters".to_string())
            );
            assert_eq!(
                field.validate(&"x".repeat(101).as_str().into()),
                Some("Name must be less than 100 characters".to_string())
            );
        }

        #[test]
        fn test_optional_phone_allows_blank_but_checks_shape() {
            let field = phone_optional("phone", "Phone");
            assert_eq!(field.validate(&"".into()), None);
            assert_eq!(
                field.validate(&"call me".into()),
                Some("Please enter a valid phone number".to_string())
            );
        }

        #[test]
        fn test_message_preset() {
            let field = message_field("message", "Message");
            assert_eq!(
                field.validate(&"too short".into()),
                Some("Please provide more detail (at least 10 characters)".to_string())
            );
            assert_eq!(field.validate(&"long enough text".into()), None);
        }

        #[test]
        fn test_contact_reason_accepts_free_text() {
            let mut values = CONTACT.defaults();
            values.set("name", "Jane Doe");
            values.set("email", "jane@example.com");
            values.set("message", "Is there a colony near Zilker Park?");
            values.set("reason", "Billing question");
            assert!(CONTACT.validate(&values).is_empty());
        }
    }

    mod colony {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_colony_passes() {
            assert!(COLONY_SUBMISSION.validate(&valid_colony()).is_empty());
        }

        #[test]
        fn test_estimated_cats_bounds() {
            let mut values = valid_colony();
            values.set("estimatedCats", 0);
            assert_eq!(
                COLONY_SUBMISSION.validate(&values).get("estimatedCats"),
                Some("Must be at least 1 cat")
            );

            values.set("estimatedCats", 501);
            assert_eq!(
                COLONY_SUBMISSION.validate(&values).get("estimatedCats"),
                Some("For very large colonies, please contact us directly")
            );

            values.set("estimatedCats", 500);
            assert!(!COLONY_SUBMISSION.validate(&values).contains("estimatedCats"));
        }

        #[test]
        fn test_coordinates_are_optional_but_bounded() {
            let mut values = valid_colony();
            values.set("latitude", "");
            assert!(COLONY_SUBMISSION.validate(&values).is_empty());
            values.set("latitude", 91);
            assert_eq!(
                COLONY_SUBMISSION.validate(&values).get("latitude"),
                Some("Invalid latitude")
            );
        }
    }

    mod deposit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_deposit_passes() {
            assert!(DEPOSIT_ASSISTANCE.validate(&valid_deposit()).is_empty());
        }

        #[test]
        fn test_deposit_amount_bounds() {
            let mut values = valid_deposit();
            values.set("depositAmount", 49);
            assert_eq!(
                DEPOSIT_ASSISTANCE.validate(&values).get("depositAmount"),
                Some("Minimum request is $50")
            );
            values.set("depositAmount", 50);
            assert_eq!(DEPOSIT_ASSISTANCE.validate(&values).get("depositAmount"), None);
            values.set("depositAmount", 2000);
            assert_eq!(DEPOSIT_ASSISTANCE.validate(&values).get("depositAmount"), None);
            values.set("depositAmount", 2001);
            assert_eq!(
                DEPOSIT_ASSISTANCE.validate(&values).get("depositAmount"),
                Some("Maximum request is $2,000")
            );
            values.set("depositAmount", "");
            assert_eq!(
                DEPOSIT_ASSISTANCE.validate(&values).get("depositAmount"),
                Some("Please enter a valid amount")
            );
        }

        #[test]
        fn test_unknown_species_uses_select_message() {
            let mut values = valid_deposit();
            values.set("petSpecies", "iguana");
            assert_eq!(
                DEPOSIT_ASSISTANCE.validate(&values).get("petSpecies"),
                Some("Please select pet type")
            );
        }

        #[test]
        fn test_negative_income_rejected() {
            let mut values = valid_deposit();
            values.set("monthlyIncome", -1);
            assert_eq!(
                DEPOSIT_ASSISTANCE.validate(&values).get("monthlyIncome"),
                Some("Income cannot be negative")
            );
        }
    }

    mod donations {
        use super::*;
        use pretty_assertions::assert_eq;

        fn valid_donation() -> FormValues {
            let mut values = DONATION.defaults();
            values.set("amount", 25);
            values.set("email", "donor@example.com");
            values
        }

        #[test]
        fn test_recurring_requires_interval() {
            let mut values = valid_donation();
            assert!(DONATION.validate(&values).is_empty());

            values.set("isRecurring", true);
            assert_eq!(
                DONATION.validate(&values).get("interval"),
                Some("Please choose monthly or yearly")
            );

            values.set("interval", "month");
            assert!(DONATION.validate(&values).is_empty());
        }

        #[test]
        fn test_tribute_notify_requires_recipient_email() {
            let mut values = TRIBUTE_DONATION.defaults();
            values.set("tributeType", "memorial");
            values.set("honoreeType", "pet");
            values.set("honoreeName", "Whiskers");
            values.set("donorName", "Alex Kim");
            values.set("donorEmail", "alex@example.com");
            values.set("amount", 50);
            assert!(TRIBUTE_DONATION.validate(&values).is_empty());

            values.set("notifyRecipient", true);
            assert_eq!(
                TRIBUTE_DONATION.validate(&values).get("recipientEmail"),
                Some("Recipient email is required to send a notification")
            );

            values.set("recipientEmail", "not-an-email");
            assert_eq!(
                TRIBUTE_DONATION.validate(&values).get("recipientEmail"),
                Some("Please enter a valid email")
            );

            values.set("recipientEmail", "family@example.com");
            assert!(TRIBUTE_DONATION.validate(&values).is_empty());
        }

        #[test]
        fn test_tribute_minimum() {
            let mut values = TRIBUTE_DONATION.defaults();
            values.set("amount", 4);
            assert_eq!(
                TRIBUTE_DONATION.validate(&values).get("amount"),
                Some("Minimum tribute donation is $5")
            );
        }
    }

    #[test]
    fn test_vet_fund_defaults_to_dog() {
        assert_eq!(VET_FUND.defaults().text("petSpecies"), "dog");
    }
}
