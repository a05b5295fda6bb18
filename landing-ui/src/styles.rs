//! CSS for the landing page.
//!
//! Dark glass look: translucent panels over a deep indigo background,
//! gradient icon badges, and a hover glow on each tool card. Entrance
//! animations (`fade-in`, `scale-in`) are staggered through inline
//! `animation-delay` values taken from the tool catalog.
//!
//! # Customization
//!
//! ```rust
//! use numtools_ui::styles::LANDING_CSS;
//!
//! let my_css = ".tool-name { letter-spacing: 0.02em; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! assert!(combined.contains(".tool-card"));
//! ```

/// Complete CSS for the landing page and the host app shell.
pub const LANDING_CSS: &str = r#"
:root {
    --bg: #0b1020;
    --bg-glow: #1e1b4b;
    --panel: rgba(255, 255, 255, 0.05);
    --panel-border: rgba(255, 255, 255, 0.1);
    --panel-border-hover: rgba(255, 255, 255, 0.2);
    --text: #f3f4f6;
    --text-dim: #9ca3af;
    --text-dimmer: #d1d5db;
    --accent: #34d399;
    --label: rgba(129, 140, 248, 0.8);
    --radius: 0.75rem;
    --radius-lg: 1rem;
    --ease: cubic-bezier(0.4, 0, 0.2, 1);
}

* { box-sizing: border-box; }

body {
    margin: 0;
    min-height: 100vh;
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    color: var(--text);
    background: radial-gradient(circle at top, var(--bg-glow), var(--bg) 60%);
}

.app-main {
    padding: 2rem 1rem 4rem;
}

.landing {
    max-width: 72rem;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 3rem;
}

/* Summary tiles */
.stat-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1rem;
}

.stat-tile {
    display: flex;
    align-items: center;
    padding: 1rem;
    background: var(--panel);
    backdrop-filter: blur(16px);
    border: 1px solid var(--panel-border);
    border-radius: var(--radius);
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}

.stat-badge {
    display: flex;
    padding: 0.75rem;
    border-radius: var(--radius);
    color: #fff;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
}

.stat-text { margin-left: 1rem; }

.stat-label {
    margin: 0;
    font-size: 0.75rem;
    font-weight: 500;
    color: var(--label);
}

.stat-value {
    margin: 0.25rem 0 0;
    font-size: 1.5rem;
    font-weight: 700;
    font-variant-numeric: tabular-nums;
}

/* Header */
.landing-header {
    text-align: center;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
}

.landing-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    background: var(--panel);
    border: 1px solid var(--panel-border);
    font-size: 0.875rem;
}

.badge-icon { color: #fbbf24; }

.landing-title {
    margin: 0;
    font-size: 2.25rem;
    font-weight: 700;
    background-image: linear-gradient(to right, #818cf8, #f472b6);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.landing-subtitle {
    margin: 0;
    max-width: 42rem;
    font-size: 1.125rem;
    color: var(--text-dim);
}

/* Tool cards */
.tool-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
}

.tool-card {
    position: relative;
    overflow: hidden;
    padding: 0.25rem;
    border: 0;
    border-radius: var(--radius-lg);
    background: transparent;
    color: inherit;
    font: inherit;
    text-align: left;
    cursor: pointer;
    animation: scale-in 0.5s var(--ease) both;
}

.tool-card-glow {
    position: absolute;
    inset: 0;
    opacity: 0;
    filter: blur(24px);
    transition: opacity 0.5s var(--ease);
}

.tool-card-body {
    position: relative;
    height: 100%;
    padding: 2rem;
    background: var(--panel);
    backdrop-filter: blur(16px);
    border: 1px solid var(--panel-border);
    border-radius: var(--radius);
    transition: border-color 0.5s var(--ease);
}

.tool-card-top {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1rem;
}

.tool-badge {
    display: flex;
    padding: 0.75rem;
    border-radius: var(--radius);
    color: #fff;
    transition: transform 0.5s var(--ease);
}

.tool-arrow {
    color: rgba(255, 255, 255, 0.5);
    opacity: 0;
    transition: transform 0.5s var(--ease), opacity 0.5s var(--ease);
}

.tool-name {
    margin: 0 0 0.5rem;
    font-size: 1.5rem;
    font-weight: 700;
    transition: color 0.3s var(--ease);
}

.tool-description {
    margin: 0;
    color: var(--text-dim);
    transition: color 0.3s var(--ease);
}

.tool-card-underline {
    position: absolute;
    left: 0;
    bottom: 0;
    width: 100%;
    height: 0.25rem;
    opacity: 0;
    transition: opacity 0.5s var(--ease);
}

.tool-card:hover .tool-card-glow,
.tool-card:hover .tool-card-underline,
.tool-card:focus-visible .tool-card-glow { opacity: 1; }
.tool-card:hover .tool-card-body { border-color: var(--panel-border-hover); }
.tool-card:hover .tool-badge { transform: scale(1.1) rotate(3deg); }
.tool-card:hover .tool-arrow { opacity: 1; transform: translateX(0.5rem); }
.tool-card:hover .tool-name { color: var(--accent); }
.tool-card:hover .tool-description { color: var(--text-dimmer); }

/* Footer */
.landing-footer {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    font-size: 0.875rem;
    color: var(--text-dim);
}

.heart { color: var(--accent); }

/* Tool frame (host app) */
.tool-frame {
    max-width: 72rem;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.back-button {
    align-self: flex-start;
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border: 1px solid var(--panel-border);
    border-radius: 9999px;
    background: var(--panel);
    color: inherit;
    font: inherit;
    cursor: pointer;
}

.back-button:hover { border-color: var(--panel-border-hover); }

.tool-frame-title { margin: 0; font-size: 2rem; }
.tool-frame-description { margin: 0; color: var(--text-dim); }

/* Animations */
.fade-in { animation: fade-in 0.6s var(--ease) both; }

@keyframes fade-in {
    from { opacity: 0; transform: translateY(0.5rem); }
    to { opacity: 1; transform: none; }
}

@keyframes scale-in {
    from { opacity: 0; transform: scale(0.95); }
    to { opacity: 1; transform: none; }
}

@media (prefers-reduced-motion: reduce) {
    .tool-card, .fade-in { animation: none; }
}

@media (min-width: 768px) {
    .stat-grid { grid-template-columns: repeat(2, 1fr); gap: 2rem; }
    .stat-tile { padding: 2rem; }
    .stat-badge { padding: 1rem; }
    .stat-text { margin-left: 1.5rem; }
    .stat-label { font-size: 0.875rem; }
    .stat-value { font-size: 1.875rem; }
    .landing-title { font-size: 3rem; }
    .tool-grid { grid-template-columns: repeat(2, 1fr); }
}
"#;
