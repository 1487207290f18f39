//! HTML email templates branded per chapter
//!
//! Every user-supplied string is escaped before it is embedded. Free text
//! additionally keeps its line breaks.

use crate::city::CityConfig;
use crate::forms::payload::{ColonySubmission, ContactMessage, LostFoundReport};
use crate::sanitize::{escape_html, sanitize_for_html, sanitize_url};
use crate::validation::format_number;

/// (primary, hover) hex colors for a branding color name
fn brand_colors(name: &str) -> (&'static str, &'static str) {
    match name {
        "teal" => ("#0d9488", "#0f766e"),
        "blue" => ("#3b82f6", "#2563eb"),
        "orange" => ("#f97316", "#ea580c"),
        "emerald" => ("#10b981", "#059669"),
        _ => ("#f59e0b", "#d97706"),
    }
}

/// Dollar amount with thousands separators: 1234.5 -> "1,234.50"
pub fn format_amount(amount: f64) -> String {
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let (whole, cents) = (total_cents / 100, total_cents % 100);
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0.0 && total_cents > 0 { "-" } else { "" };
    if cents == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{cents:02}")
    }
}

/// Wrap content in the chapter's layout
pub fn base(city: &CityConfig, content: &str) -> String {
    let (primary, hover) = brand_colors(city.primary_color);
    let org = escape_html(city.org_name_short);
    let tagline = escape_html(city.tagline);
    let site = escape_html(&sanitize_url(city.site_url));
    let site_label = escape_html(
        city.site_url
            .trim_start_matches("https://")
            .trim_start_matches("http://"),
    );
    let location = escape_html(&city.location());

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <style>
    body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: linear-gradient(135deg, {primary}, {hover}); padding: 30px; text-align: center; border-radius: 12px 12px 0 0; }}
    .header h1 {{ color: white; margin: 0; font-size: 24px; }}
    .content {{ background: #fff; padding: 30px; border: 1px solid #e5e7eb; }}
    .footer {{ background: #f3f4f6; padding: 20px; text-align: center; font-size: 12px; color: #6b7280; border-radius: 0 0 12px 12px; }}
    .button {{ display: inline-block; background: {primary}; color: white; padding: 12px 24px; text-decoration: none; border-radius: 8px; font-weight: 600; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>{org}</h1>
    </div>
    <div class="content">
      {content}
    </div>
    <div class="footer">
      <p>{org} - {tagline}</p>
      <p>{location} | <a href="{site}">{site_label}</a></p>
    </div>
  </div>
</body>
</html>
"#
    )
}

fn link(city: &CityConfig, path: &str) -> String {
    escape_html(&sanitize_url(&city.url(path)))
}

pub fn contact_confirmation(city: &CityConfig, name: &str) -> String {
    base(
        city,
        &format!(
            r#"<h2>Thanks for reaching out, {name}!</h2>
<p>We've received your message and will get back to you within 24-48 hours.</p>
<p>In the meantime, check out our <a href="{resources}">resources</a> for helpful information.</p>
<p>Best,<br>The {org} Team</p>"#,
            name = escape_html(name),
            resources = link(city, "/resources"),
            org = escape_html(city.org_name_short),
        ),
    )
}

pub fn contact_notification(city: &CityConfig, message: &ContactMessage, subject: &str) -> String {
    base(
        city,
        &format!(
            r#"<h2>New Contact Form Submission</h2>
<p><strong>From:</strong> {name} ({email})</p>
<p><strong>Subject:</strong> {subject}</p>
<p><strong>Message:</strong></p>
<div style="background: #f9fafb; padding: 15px; border-radius: 8px; margin: 15px 0;">
  {body}
</div>
<a href="mailto:{email}" class="button">Reply to {name}</a>"#,
            name = escape_html(&message.name),
            email = escape_html(&message.email),
            subject = escape_html(subject),
            body = sanitize_for_html(&message.message, true),
        ),
    )
}

pub fn volunteer_welcome(city: &CityConfig, name: &str, roles: &[String]) -> String {
    let items: String = roles
        .iter()
        .map(|role| format!("<li>{}</li>", escape_html(role)))
        .collect();
    base(
        city,
        &format!(
            r#"<h2>Welcome to the Pack, {name}!</h2>
<p>Thank you for signing up to volunteer with {org}. We're thrilled to have you join our mission!</p>
<p><strong>You signed up for:</strong></p>
<ul>{items}</ul>
<p>A volunteer coordinator will reach out within the next few days to discuss next steps and answer any questions.</p>
<a href="{events}" class="button">View Upcoming Events</a>"#,
            name = escape_html(name),
            org = escape_html(city.org_name_short),
            events = link(city, "/events"),
        ),
    )
}

pub fn foster_welcome(city: &CityConfig, name: &str, foster_type: &str) -> String {
    base(
        city,
        &format!(
            r#"<h2>Thank You for Applying to Foster, {name}!</h2>
<p>We're so grateful you want to open your home to animals in need.</p>
<p><strong>Foster Type:</strong> {foster_type}</p>
<h3>Next Steps:</h3>
<ol>
  <li>Our foster coordinator will review your application (1-3 business days)</li>
  <li>We'll schedule a brief phone orientation</li>
  <li>Once approved, you'll be added to our foster network</li>
</ol>
<p>Questions? Reply to this email or visit our <a href="{foster}">foster page</a>.</p>"#,
            name = escape_html(name),
            foster_type = escape_html(foster_type),
            foster = link(city, "/foster"),
        ),
    )
}

pub fn deposit_confirmation(city: &CityConfig, name: &str, amount: f64) -> String {
    base(
        city,
        &format!(
            r#"<h2>Application Received, {name}</h2>
<p>We've received your pet deposit assistance application for ${amount}.</p>
<h3>What Happens Next:</h3>
<ol>
  <li>Our team will review your application (typically 3-5 business days)</li>
  <li>We may reach out for additional documentation</li>
  <li>You'll receive a decision by email</li>
</ol>
<p>If approved, funds are typically disbursed within 1-2 weeks directly to your landlord/property manager.</p>
<p style="color: #6b7280; font-size: 14px;">Need immediate assistance? Call 211 for additional housing resources.</p>"#,
            name = escape_html(name),
            amount = format_amount(amount),
        ),
    )
}

pub fn vet_fund_confirmation(city: &CityConfig, name: &str, pet_name: &str) -> String {
    base(
        city,
        &format!(
            r#"<h2>Emergency Vet Fund Application Received</h2>
<p>Hi {name},</p>
<p>We've received your emergency vet fund application for {pet}. We understand this is a stressful time.</p>
<h3>Timeline:</h3>
<ul>
  <li><strong>Emergency cases:</strong> 24-48 hours</li>
  <li><strong>Non-emergency cases:</strong> 3-5 business days</li>
</ul>
<p>We'll contact you and your veterinarian directly once a decision is made.</p>
<p style="color: #dc2626;"><strong>If this is a life-threatening emergency:</strong> Please proceed with treatment. Many vets offer payment plans, and we can potentially help with costs retroactively.</p>"#,
            name = escape_html(name),
            pet = escape_html(pet_name),
        ),
    )
}

pub fn sponsor_confirmation(city: &CityConfig, company_name: &str) -> String {
    base(
        city,
        &format!(
            r#"<h2>Thank You for Your Interest, {company}!</h2>
<p>We're excited about the possibility of partnering with you to help {city_name}'s animals.</p>
<p>A member of our partnerships team will reach out within 2-3 business days to discuss sponsorship opportunities.</p>
<h3>In the meantime:</h3>
<ul>
  <li><a href="{impact}">View our impact</a></li>
  <li><a href="{stories}">Read success stories</a></li>
</ul>"#,
            company = escape_html(company_name),
            city_name = escape_html(city.city),
            impact = link(city, "/impact"),
            stories = link(city, "/stories"),
        ),
    )
}

pub fn colony_notification(city: &CityConfig, colony: &ColonySubmission) -> String {
    let colony_name = if colony.colony_name.trim().is_empty() {
        "Unnamed colony"
    } else {
        colony.colony_name.as_str()
    };
    let urgent = if colony.urgent_needs.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div style="background: #fef2f2; border: 1px solid #fecaca; padding: 15px; border-radius: 8px; margin: 15px 0;">
  <p style="color: #dc2626; font-weight: bold; margin: 0 0 10px 0;">Urgent Needs:</p>
  <p style="margin: 0;">{}</p>
</div>"#,
            sanitize_for_html(&colony.urgent_needs.join("\n"), true)
        )
    };

    base(
        city,
        &format!(
            r#"<h2>New Colony Submission</h2>
<p><strong>Colony Name:</strong> {name}</p>
<p><strong>Location:</strong> {location}</p>
<p><strong>Estimated Cats:</strong> {cats}</p>
<p><strong>Submitted by:</strong> {submitter} ({email})</p>
{urgent}
<a href="{admin}" class="button">Review in Admin</a>"#,
            name = escape_html(colony_name),
            location = sanitize_for_html(&colony.location_description, true),
            cats = format_number(colony.estimated_cats),
            submitter = escape_html(&colony.submitter_name),
            email = escape_html(&colony.submitter_email),
            admin = link(city, "/admin/colonies"),
        ),
    )
}

pub fn lost_pet_alert(city: &CityConfig, report: &LostFoundReport) -> String {
    let pet_name = if report.name.trim().is_empty() {
        "Unnamed pet"
    } else {
        report.name.as_str()
    };
    let heading = if report.is_lost() {
        "Lost Pet Alert"
    } else {
        "Found Pet Report"
    };

    base(
        city,
        &format!(
            r#"<h2>{heading}: {name}</h2>
<p><strong>Species:</strong> {species}</p>
<p><strong>Color/markings:</strong> {color}</p>
<p><strong>Last Seen:</strong> {location} on {date}</p>
<p><strong>Description:</strong> {description}</p>
<a href="{board}" class="button">View Lost &amp; Found Board</a>
<p style="margin-top: 20px; font-size: 14px;">If you've seen this pet, please contact the owner through our website or call {city_name} 311.</p>"#,
            name = escape_html(pet_name),
            species = escape_html(&report.species),
            color = escape_html(&report.color),
            location = escape_html(&report.location),
            date = escape_html(&report.date),
            description = sanitize_for_html(&report.description, true),
            board = link(city, "/lost-found"),
            city_name = escape_html(city.city),
        ),
    )
}

/// A table of label/value rows for admin notifications
pub fn submission_summary(city: &CityConfig, title: &str, rows: &[(String, String)]) -> String {
    let body: String = rows
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<tr><td style="padding: 6px 12px; font-weight: 600; vertical-align: top;">{}</td><td style="padding: 6px 12px;">{}</td></tr>"#,
                escape_html(label),
                sanitize_for_html(value, true)
            )
        })
        .collect();

    base(
        city,
        &format!(
            r#"<h2>{title}</h2>
<table style="border-collapse: collapse; width: 100%;">{body}</table>"#,
            title = escape_html(title),
        ),
    )
}
