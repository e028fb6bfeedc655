//! English (US) translation resources in Fluent syntax.

/// All landing page strings.
pub const LANDING: &str = r#"
navbar-brand = ShowRoom
navbar-product = Product
navbar-pricing = Pricing
navbar-community = Community
navbar-login = Log in
navbar-logout = Log out
navbar-get-started = Get Started
navbar-greeting = Hi, { $name }

hero-introducing = Introducing ShowRoom Render
hero-title = Design once. Show it everywhere.
hero-subtitle = Upload a floor plan and watch ShowRoom stage a photoreal render of your space in seconds.
hero-get-started = Get Started
hero-upload = Upload a floor plan
hero-upload-description = Drop a plan below and we will stage the render for you.
hero-upload-active = Click to upload or drag and drop a floor plan
hero-upload-inactive = Sign in to upload a floor plan
hero-analysing = Analysing your floor plan...
hero-redirecting = Render ready, redirecting...
hero-upload-failed = We could not read that file. Try another image.

projects-title = Fresh from the showroom
projects-description = Renders our community shipped this week.
projects-badge = Rendered
projects-latest = Your latest render
"#;
