//! Shared constants for page behaviors.
//!
//! Selectors and class names form the markup contract with the page; renaming
//! any of them is a breaking change for existing templates.

// ── Motion ──────────────────────────────────────────────────────

/// Media query used to read the reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element that must intersect before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.25;

/// Observer root margin: the viewport bottom is pulled up by 10%.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

/// Force-reveal counts an element as in view above this share of the viewport height.
pub const FORCE_REVEAL_VIEWPORT_RATIO: f64 = 0.98;

/// Delay after window `load` before the force-reveal pass runs.
pub const FORCE_REVEAL_DELAY_MS: u32 = 400;

// ── Navigation ──────────────────────────────────────────────────

/// Scroll offset (px) beyond which the nav becomes sticky.
pub const STICKY_SCROLL_OFFSET_PX: f64 = 32.0;

/// Elements that participate in the mobile nav focus trap.
pub const FOCUSABLE_SELECTORS: [&str; 7] = [
    "a[href]",
    "area[href]",
    "button:not([disabled])",
    "input:not([disabled])",
    "select:not([disabled])",
    "textarea:not([disabled])",
    "[tabindex]:not([tabindex=\"-1\"])",
];

/// Value written to `aria-controls` when the toggle has none.
pub const NAV_CONTROLS_ID: &str = "header";

// ── Parallax ────────────────────────────────────────────────────

/// Per-frame smoothing factor toward the pointer target.
pub const PARALLAX_SMOOTHING: f64 = 0.08;

/// Pixel displacement for a depth of 1.0 at full pointer deflection.
pub const PARALLAX_MULTIPLIER_PX: f64 = 30.0;

// ── Typewriter ──────────────────────────────────────────────────

/// Literal phrase that may contain commas and is kept whole.
pub const TYPED_MARKER_PHRASE: &str = "I'm a product designer";

pub const TYPED_TARGET_SELECTOR: &str = ".typed";
pub const TYPED_ITEMS_ATTR: &str = "data-typed-items";
pub const TYPED_TYPE_SPEED_MS: u32 = 100;
pub const TYPED_BACK_SPEED_MS: u32 = 50;
pub const TYPED_BACK_DELAY_MS: u32 = 1500;
pub const TYPED_CURSOR: &str = "|";

// ── Preloader ───────────────────────────────────────────────────

/// Pause before the preloader fades, to avoid an abrupt flash.
pub const PRELOADER_DELAY_MS: u32 = 280;

/// Removal fallback if `transitionend` never fires.
pub const PRELOADER_REMOVE_FALLBACK_MS: u32 = 900;

// ── Classes ─────────────────────────────────────────────────────

pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_STICKY: &str = "is-sticky";
pub const CLASS_EXPANDED: &str = "expanded";
pub const CLASS_NAV_ACTIVE: &str = "mobile-nav-active";
pub const CLASS_OVERLAY: &str = "mobile-nav-overlay";
pub const CLASS_OVERLAY_ACTIVE: &str = "is-active";
pub const CLASS_LOADED: &str = "is-loaded";
pub const CLASS_HIDDEN: &str = "is-hidden";

// ── Selectors ───────────────────────────────────────────────────

pub const SEL_ANIMATE: &str = "[data-animate]";
pub const SEL_DEPTH: &str = "[data-depth]";
pub const SEL_NAV: &str = ".nav";
pub const SEL_NAV_TOGGLE: &str = ".nav__toggle";
pub const SEL_MOBILE_NAV_TOGGLE: &str = ".mobile-nav-toggle";
pub const SEL_OVERLAY: &str = ".mobile-nav-overlay";
pub const SEL_NAV_MENU_LINKS: &str = ".nav-menu a";
pub const SEL_MARQUEE_TRACK: &str = ".marquee__track";
pub const SEL_MAIN: &str = "main";
pub const SEL_SUBMIT: &str = "button[type=\"submit\"]";

pub const ID_MOBILE_MENU: &str = "mobileMenu";
pub const ID_HEADER: &str = "header";
pub const ID_YEAR: &str = "year";
pub const ID_PRELOADER: &str = "preloader";
pub const ID_CONTACT_FORM: &str = "contact-form";
pub const ID_PAGE_CONFIG: &str = "page-config";

pub const FIELD_NAME: &str = "cf-name";
pub const FIELD_EMAIL: &str = "cf-email";
pub const FIELD_PHONE: &str = "cf-phone";
pub const FIELD_SUBJECT: &str = "cf-subject";
pub const FIELD_MESSAGE: &str = "cf-message";
pub const FIELD_ROUTE: &str = "cf-route";

// ── Contact ─────────────────────────────────────────────────────

pub const CONTACT_PATH: &str = "/api/contact";
pub const DEFAULT_BACKEND_URL: &str = "https://your-backend-url.com";
pub const DEFAULT_CONTACT_EMAIL: &str = "sasuisaac332@gmail.com";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "233201142183";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

pub const SUBMIT_LABEL_DEFAULT: &str = "Send";
pub const SUBMIT_LABEL_SENDING: &str = "Sending...";

pub const DEFAULT_MAIL_SUBJECT: &str = "New message from portfolio";
pub const CHAT_HEADER_LINE: &str = "New message from portfolio";

pub const MSG_MISSING_NAME_OR_MESSAGE: &str = "Please provide your name and a message.";
pub const MSG_MISSING_EMAIL: &str = "Please enter your email so I can reply.";
pub const MSG_SENT: &str = "✅ Message sent successfully! I'll get back to you soon.";
pub const MSG_SEND_FAILED: &str = "Failed to send. Please try again.";
pub const MSG_NETWORK_ERROR: &str = "❌ Network error. Please try WhatsApp or Email instead.";
