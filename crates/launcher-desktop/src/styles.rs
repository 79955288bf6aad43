//! Shared stylesheet for the desktop shell.
//!
//! Colors come from CSS variables set on the app container by the theme.

pub const APP_STYLES: &str = r"
* {
    box-sizing: border-box;
}

body {
    margin: 0;
}

.app-container {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
    font-family: system-ui, -apple-system, sans-serif;
    font-size: 14px;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.icon {
    width: 20px;
    height: 20px;
    flex-shrink: 0;
    stroke: currentColor;
    fill: none;
    stroke-width: 2;
    stroke-linecap: round;
    stroke-linejoin: round;
}

.settings-row {
    display: flex;
    align-items: center;
    gap: 16px;
    padding: 12px 16px;
    border-radius: 8px;
    background: var(--bg-secondary);
}

.settings-row--interactive {
    cursor: pointer;
    transition: background-color 120ms ease, transform 120ms ease;
}

.settings-row--interactive:hover {
    background: var(--bg-hover);
}

.settings-row--interactive:active {
    transform: scale(0.99);
}

.settings-row-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 32px;
    height: 32px;
    flex-shrink: 0;
}

.settings-row-info {
    display: flex;
    flex: 1;
    flex-direction: column;
    gap: 2px;
    min-width: 0;
}

.settings-row-title {
    font-weight: 600;
}

.settings-row-description {
    font-size: 12px;
    color: var(--text-secondary);
}

.settings-row-control {
    display: flex;
    align-items: center;
    gap: 8px;
}

.chip {
    padding: 4px 10px;
    border: 1px solid var(--border);
    border-radius: 999px;
    background: var(--bg-primary);
    color: var(--text-primary);
    font-size: 12px;
    cursor: pointer;
}

.chip:disabled {
    opacity: 0.5;
    cursor: default;
}

.chip--selected {
    border-color: var(--accent);
    background: var(--accent);
    color: var(--accent-text);
}

.toggle {
    min-width: 40px;
    padding: 2px 8px;
    border-radius: 999px;
    background: var(--bg-hover);
    color: var(--text-secondary);
    font-size: 12px;
    text-align: center;
}

.toggle--on {
    background: var(--accent);
    color: var(--accent-text);
}

.settings-row-header {
    margin: 24px 0 8px;
    font-size: 12px;
    font-weight: 600;
    letter-spacing: 0.04em;
    text-transform: uppercase;
    color: var(--text-secondary);
}

.settings-list {
    display: flex;
    flex-direction: column;
    gap: 8px;
    max-width: 720px;
}

.cluster-root {
    display: flex;
    flex: 1;
    min-height: 100vh;
}

.sidebar {
    width: 220px;
    flex-shrink: 0;
    padding: 16px;
    border-right: 1px solid var(--border);
    background: var(--bg-secondary);
    overflow-y: auto;
}

.sidebar-group-title {
    margin: 16px 0 6px;
    font-size: 12px;
    font-weight: 600;
    color: var(--text-secondary);
}

.sidebar-link {
    display: flex;
    align-items: center;
    gap: 10px;
    padding: 8px 10px;
    margin-bottom: 2px;
    border-radius: 6px;
    color: var(--text-primary);
    text-decoration: none;
    transition: background 0.15s;
}

.sidebar-link:hover {
    background: var(--bg-hover);
}

.sidebar-link--active {
    background: var(--accent);
    color: var(--accent-text);
}

.cluster-content {
    flex: 1;
    padding: 24px;
    overflow-y: auto;
}

.route-transition {
    animation: route-enter 180ms ease-out;
}

@keyframes route-enter {
    from {
        opacity: 0;
        transform: translateY(6px);
    }
    to {
        opacity: 1;
        transform: none;
    }
}

.route-error {
    padding: 16px;
    border: 1px solid var(--error);
    border-radius: 8px;
    color: var(--error);
}

.route-error pre {
    white-space: pre-wrap;
}
";
