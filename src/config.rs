pub const SITE_NAME: &str = "TechForge";

pub const SITE_TAGLINE: &str =
    "Ten tools we reach for on every engagement, from the first prototype to production.";
