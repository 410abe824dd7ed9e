//! Author profile and social links.
//!
//! Static content shown in the About and Contact sections. Social links carry a
//! closed [`SocialIcon`] tag that the UI resolves to a label; no untyped handles
//! travel through the core.

/// Blog title shown in the header and drawer.
pub const BLOG_NAME: &str = "NOMORRA";

/// Hero tagline.
pub const TAGLINE: &str = "My blog through America's best national parks";

/// About section paragraphs.
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "A passionate explorer documenting my journey through America's most breathtaking \
     national parks. What started as weekend getaways has evolved into a deep love affair \
     with the wilderness.",
    "Through this blog, I share the raw beauty, hidden gems, and transformative experiences \
     that these sacred places offer. Join me as I chase sunrises, conquer trails, and \
     discover the stories that nature whispers to those who listen.",
];

pub const LATEST_EXPEDITION: &str = "Montana, USA";
pub const NEXT_ADVENTURE: &str = "Washington, USA";

/// Supported social networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialIcon {
    Facebook,
    Twitter,
    Instagram,
    YouTube,
}

impl SocialIcon {
    /// Display label for the network.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::YouTube => "YouTube",
        }
    }
}

/// A link to one of the author's social profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub url: &'static str,
}

/// Links listed in the Contact section, in display order.
pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { icon: SocialIcon::Facebook, url: "https://facebook.com/campexplorer" },
    SocialLink { icon: SocialIcon::Twitter, url: "https://twitter.com/campexplorer" },
    SocialLink { icon: SocialIcon::Instagram, url: "https://instagram.com/campexplorer" },
    SocialLink { icon: SocialIcon::YouTube, url: "https://youtube.com/@campexplorer" },
];
