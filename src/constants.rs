/// Document hooks the frontend binds to.
///
/// Ids and class names are shared with the page markup and stylesheet; the
/// stylesheet owns every visual transition keyed off these classes.
// Floating cards
pub const CARD_SELECTOR: &str = ".draggable";
pub const CARD_TARGET_ATTR: &str = "data-target";
pub const CARD_TITLE_SELECTOR: &str = "img";

// Fixed UI regions cards are layered against on release
pub const HERO_PANEL_ID: &str = "floating-hero";
pub const INDEX_PANEL_ID: &str = "floating-index";
pub const UI_PANEL_IDS: [&str; 2] = [HERO_PANEL_ID, INDEX_PANEL_ID];

// Mobile stack anchor
pub const STACK_ANCHOR_ID: &str = "bio";

// Project index and sections
pub const INDEX_CONTENT_ID: &str = "index-content";
pub const INDEX_LIST_ID: &str = "index-list-container";
pub const INDEX_TOGGLE_ID: &str = "index-expand-btn";
pub const PROJECT_SECTION_SELECTOR: &str = ".project-section";
pub const PROJECT_TITLE_SELECTOR: &str = "h2";
pub const PROJECT_DETAILS_SELECTOR: &str = ".project-details";

// Navigation bar
pub const NAV_BAR_ID: &str = "project-nav-bar";
pub const NAV_ITEM_CLASS: &str = "nav-item";

// Info boxes
pub const BOX_SELECTOR: &str = ".box-content";

// Slideshows
pub const SLIDESHOW_SELECTOR: &str = ".slideshow";
pub const SLIDE_SELECTOR: &str = "img, video";
pub const SLIDESHOW_CONTAINER_CLASS: &str = "slideshow-container";
pub const SLIDE_BUTTON_CLASS: &str = "nav-btn";
pub const PREV_BUTTON_CLASS: &str = "prev";
pub const NEXT_BUTTON_CLASS: &str = "next";
pub const PREV_BUTTON_LABEL: &str = "←";
pub const NEXT_BUTTON_LABEL: &str = "→";
pub const SLIDE_COUNTER_CLASS: &str = "slide-counter";

// State classes
pub const CLASS_ANIMATING: &str = "animating";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_EXPANDED: &str = "expanded";
pub const CLASS_SNIPPET: &str = "snippet";
pub const CLASS_CONTENT_HIDDEN: &str = "content-hidden";
pub const CLASS_COLLAPSED: &str = "collapsed";
pub const CLASS_HIGHLIGHT: &str = "highlight";
pub const CLASS_ACTIVE: &str = "active";

// Body dataset prefix for config overrides
pub const CONFIG_ATTR_PREFIX: &str = "data-";
