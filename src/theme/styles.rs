//! Global CSS styles for the quote card preview.
//!
//! Class contracts for the `quotecard-ui` primitives live here too.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #ffffff;
  --surface-muted: #f4f5f7;
  --border: rgba(0, 0, 0, 0.12);

  /* Brand */
  --primary: #3f51b5;
  --primary-dark: #303f9f;
  --secondary: #f50057;

  /* Text */
  --text-primary: rgba(0, 0, 0, 0.87);
  --text-secondary: rgba(0, 0, 0, 0.6);
  --text-inverse: #ffffff;

  /* Typography */
  --font-sans: 'Roboto', 'Segoe UI', 'Helvetica Neue', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--surface-muted);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

.app-shell {
  max-width: 680px;
  margin: 0 auto;
  padding: 1.5rem;
}

.page-title {
  font-size: 1.5rem;
  font-weight: 500;
  margin-bottom: 1rem;
}

/* === Paper === */
.paper {
  background: var(--surface);
  border-radius: 4px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2), 0 1px 1px rgba(0, 0, 0, 0.14);
  padding: 10px;
  width: 100%;
  height: 100%;
}

/* === Preview Card === */
.preview-card__image {
  text-align: center;
  min-height: 60px;
}

.preview-card__image img {
  width: 100%;
}

.preview-card__actions {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 16px;
  margin-top: 8px;
}

.preview-card__snippet {
  flex-grow: 1;
}

/* === Text Field === */
.text-field {
  display: flex;
  flex-direction: column;
  width: 100%;
}

.text-field__input {
  width: 100%;
  padding: 6px 0 7px;
  border: none;
  border-bottom: 1px solid var(--border);
  background: transparent;
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--text-primary);
}

.text-field__input:focus {
  outline: none;
  border-bottom: 2px solid var(--primary);
}

/* === Buttons === */
.btn-contained {
  padding: 6px 16px;
  border: none;
  border-radius: 4px;
  background: var(--primary);
  color: var(--text-inverse);
  font-family: var(--font-sans);
  font-size: 0.875rem;
  font-weight: 500;
  text-transform: uppercase;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-contained:hover {
  background: var(--primary-dark);
}

button:disabled {
  opacity: 0.5;
  cursor: default;
}

/* === Spinner === */
.spinner {
  display: inline-block;
  width: 40px;
  height: 40px;
  border: 4px solid rgba(245, 0, 87, 0.2);
  border-top-color: var(--secondary);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Toast === */
.toast {
  position: fixed;
  left: 50%;
  bottom: 24px;
  min-width: 288px;
  padding: 6px 16px;
  border-radius: 4px;
  background: #323232;
  color: var(--text-inverse);
  font-size: 0.875rem;
  box-shadow: 0 3px 5px rgba(0, 0, 0, 0.2);
  transform: translate(-50%, 150%);
  opacity: 0;
  pointer-events: none;
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.toast--open {
  transform: translate(-50%, 0);
  opacity: 1;
  pointer-events: auto;
}

.toast__message {
  display: block;
  padding: 8px 0;
}
"#;
