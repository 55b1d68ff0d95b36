//! Schemas for every content type served by the site.
//!
//! Each schema mirrors the stored document shape (camelCase field names) and
//! is evaluated before anything reaches the document store.

use crate::schema::{DefaultValue, FieldSpec, Format, Schema};

// ---------------------------------------------------------------------------
// Enumerated values
// ---------------------------------------------------------------------------

pub const GALLERY_CATEGORY_PROJECTS: &str = "projects";
pub const GALLERY_CATEGORY_EVENTS: &str = "events";
pub const GALLERY_CATEGORY_TEAM: &str = "team";
pub const GALLERY_CATEGORY_WORKSPACE: &str = "workspace";

/// All valid gallery categories.
pub const GALLERY_CATEGORIES: &[&str] = &[
    GALLERY_CATEGORY_PROJECTS,
    GALLERY_CATEGORY_EVENTS,
    GALLERY_CATEGORY_TEAM,
    GALLERY_CATEGORY_WORKSPACE,
];

/// Query value meaning "do not filter by category".
pub const GALLERY_CATEGORY_ALL: &str = "all";

/// All valid social platforms.
pub const SOCIAL_PLATFORMS: &[&str] = &["facebook", "twitter", "instagram", "linkedin", "youtube"];

pub const DEFAULT_BLOG_AUTHOR: &str = "Admin";

// ---------------------------------------------------------------------------
// Homepage sections
// ---------------------------------------------------------------------------

pub static HERO: Schema = Schema {
    entity: "Hero",
    fields: &[
        FieldSpec::text("title").required().max_length(200),
        FieldSpec::text("subtitle").required().max_length(300),
        FieldSpec::text("description"),
        FieldSpec::text("image").required(),
        FieldSpec::text("imagePublicId"),
        FieldSpec::text("ctaText"),
        FieldSpec::text("ctaLink"),
    ],
};

const OFFERING_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("icon").required(),
    FieldSpec::text("title").required().max_length(100),
    FieldSpec::text("description").required(),
    FieldSpec::text_list("features"),
    FieldSpec::text("image"),
    FieldSpec::text("imagePublicId"),
];

pub static SERVICE: Schema = Schema {
    entity: "Service",
    fields: OFFERING_FIELDS,
};

pub static DIGITAL_SOLUTION: Schema = Schema {
    entity: "DigitalSolutions",
    fields: OFFERING_FIELDS,
};

pub static TESTIMONIAL: Schema = Schema {
    entity: "Testimonial",
    fields: &[
        FieldSpec::text("name").required(),
        FieldSpec::text("role").required(),
        FieldSpec::text("company"),
        FieldSpec::text("content").required().max_length(1000),
        FieldSpec::integer("rating")
            .range(1, 5)
            .default_value(DefaultValue::Integer(5)),
        FieldSpec::text("image"),
        FieldSpec::text("imagePublicId"),
    ],
};

pub static BRAND: Schema = Schema {
    entity: "Brand",
    fields: &[
        FieldSpec::text("name").required(),
        FieldSpec::text("logo").required(),
        FieldSpec::text("logoPublicId"),
        FieldSpec::text("website").format(Format::Url),
    ],
};

pub static CTA: Schema = Schema {
    entity: "CTA",
    fields: &[
        FieldSpec::text("title").required(),
        FieldSpec::text("description").required(),
        FieldSpec::text("buttonText").required(),
        FieldSpec::text("buttonLink").required(),
    ],
};

pub static GALLERY: Schema = Schema {
    entity: "Gallery",
    fields: &[
        FieldSpec::text("title").required().max_length(100),
        FieldSpec::text("category")
            .one_of(GALLERY_CATEGORIES)
            .default_value(DefaultValue::Text(GALLERY_CATEGORY_PROJECTS)),
        FieldSpec::text("image").required(),
        FieldSpec::text("imagePublicId").required(),
        FieldSpec::text("description").max_length(500),
    ],
};

pub static SOCIAL_LINK: Schema = Schema {
    entity: "SocialLink",
    fields: &[
        FieldSpec::text("platform").required().one_of(SOCIAL_PLATFORMS),
        FieldSpec::text("url").required().format(Format::Url),
    ],
};

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

pub static CONTACT_INFO: Schema = Schema {
    entity: "ContactInfo",
    fields: &[
        FieldSpec::text("email").required().format(Format::Email),
        FieldSpec::text("phone").required(),
        FieldSpec::text("address").required(),
        FieldSpec::text("workingHours"),
        FieldSpec::text("mapUrl").format(Format::Url),
    ],
};

pub static FAQ: Schema = Schema {
    entity: "FAQ",
    fields: &[
        FieldSpec::text("question").required(),
        FieldSpec::text("answer").required(),
        FieldSpec::integer("order").default_value(DefaultValue::Integer(0)),
    ],
};

pub static MESSAGE: Schema = Schema {
    entity: "Message",
    fields: &[
        FieldSpec::text("name").required().max_length(100),
        FieldSpec::text("email").required().format(Format::Email),
        FieldSpec::text("phone"),
        FieldSpec::text("subject").max_length(200),
        FieldSpec::text("message").required().max_length(5000),
        FieldSpec::boolean("read").default_value(DefaultValue::Boolean(false)),
    ],
};

// ---------------------------------------------------------------------------
// About / professional profile
// ---------------------------------------------------------------------------

pub static CORE_EXPERTISE: Schema = Schema {
    entity: "CoreExpertise",
    fields: &[
        FieldSpec::text("title").required(),
        FieldSpec::text("description").required(),
        FieldSpec::text("icon").required(),
        FieldSpec::text_list("skills"),
    ],
};

pub static CORE_COMPETENCY: Schema = Schema {
    entity: "CoreCompetency",
    fields: &[
        FieldSpec::text("title").required(),
        FieldSpec::text("description").required(),
        FieldSpec::text("icon"),
        FieldSpec::integer("order").default_value(DefaultValue::Integer(0)),
    ],
};

pub static JOURNEY_HIGHLIGHT: Schema = Schema {
    entity: "JourneyHighlight",
    fields: &[
        FieldSpec::integer("id").required(),
        FieldSpec::text("period").required(),
        FieldSpec::text("title").required(),
        FieldSpec::text("description").required(),
        FieldSpec::text_list("tags"),
    ],
};

pub static PROFESSIONAL_JOURNEY: Schema = Schema {
    entity: "ProfessionalJourney",
    fields: &[
        FieldSpec::text("title").required(),
        FieldSpec::text("company").required(),
        FieldSpec::text("location"),
        FieldSpec::date("startDate").required(),
        FieldSpec::date("endDate"),
        FieldSpec::boolean("current").default_value(DefaultValue::Boolean(false)),
        FieldSpec::text("description").required(),
        FieldSpec::text_list("achievements"),
        FieldSpec::text_list("technologies"),
    ],
};

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

pub static BLOG: Schema = Schema {
    entity: "Blog",
    fields: &[
        FieldSpec::text("title").required().max_length(200),
        FieldSpec::text("slug").required().format(Format::Slug),
        FieldSpec::text("excerpt").required().max_length(500),
        FieldSpec::text("content").required(),
        FieldSpec::text("coverImage"),
        FieldSpec::text("coverImagePublicId"),
        FieldSpec::text("author").default_value(DefaultValue::Text(DEFAULT_BLOG_AUTHOR)),
        FieldSpec::text_list("tags"),
        FieldSpec::boolean("published").default_value(DefaultValue::Boolean(false)),
        FieldSpec::date("publishedAt"),
    ],
};

/// Whether a payload carries an image without its provider id or vice versa.
///
/// The pairing is advisory: such payloads are accepted, callers only log.
pub fn image_pair_mismatch(image: Option<&str>, public_id: Option<&str>) -> bool {
    let present = |v: Option<&str>| v.is_some_and(|s| !s.is_empty());
    present(image) != present(public_id)
}
