//! Global CSS styles for Atelier.
//!
//! Black gallery wall with purple accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* WALL (Backgrounds) */
  --wall-black: #000000;
  --wall-raised: #111827;

  /* PILLS */
  --pill-idle: #1f2937;
  --pill-hover: #374151;

  /* PURPLE (Accents, Calls to Action) */
  --purple: #9333ea;
  --purple-dark: #7e22ce;

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;

  /* Overlay */
  --overlay: rgba(0, 0, 0, 0.6);
  --overlay-strong: rgba(0, 0, 0, 0.8);

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, sans-serif;

  /* Transitions */
  --transition-fast: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--wall-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

/* === Pages === */
.hero {
  padding: 6rem 1rem 2rem;
  text-align: center;
}

.page-title {
  font-size: 3.5rem;
  font-weight: 700;
  letter-spacing: -0.02em;
}

.tagline {
  color: var(--text-muted);
  font-size: 1.125rem;
  margin-top: 1rem;
}

.page-nav {
  padding: 1.5rem 2rem 0;
}

.page-nav__back {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.page-nav__back:hover {
  color: var(--text-primary);
}

/* === Gallery Section === */
.gallery {
  background: var(--wall-black);
  position: relative;
  overflow: hidden;
}

.gallery--home {
  padding: 3rem 0;
}

.gallery--page {
  min-height: 100vh;
  padding: 5rem 0;
}

.gallery__inner {
  max-width: 1280px;
  margin: 0 auto;
  padding: 0 1rem;
  position: relative;
  z-index: 10;
}

.gallery__heading {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: 1rem;
  text-align: center;
}

.gallery__tagline {
  color: var(--text-muted);
  font-size: 1.125rem;
  max-width: 42rem;
  margin: 0 auto 3rem;
  text-align: center;
}

.gallery__footer {
  margin-top: 3rem;
  text-align: center;
}

@media (min-width: 768px) {
  .gallery__heading {
    font-size: 3rem;
  }
}

/* === Buttons === */
.btn-primary,
.btn-pill {
  border: none;
  border-radius: 9999px;
  color: var(--text-primary);
  cursor: pointer;
  font: inherit;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--purple);
  display: inline-block;
  padding: 0.75rem 2rem;
}

.btn-primary:hover {
  background: var(--purple-dark);
}

.btn-pill {
  background: var(--pill-idle);
  color: var(--text-secondary);
  padding: 0.5rem 1.5rem;
}

.btn-pill:hover {
  background: var(--pill-hover);
}

.btn-pill.selected {
  background: var(--purple);
  color: var(--text-primary);
}

/* === Category Pills === */
.category-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  justify-content: center;
  margin-bottom: 3rem;
}

/* === Grid === */
.gallery-grid {
  display: grid;
  gap: 2rem;
  grid-template-columns: 1fr;
}

@media (min-width: 768px) {
  .gallery-grid--cols-2,
  .gallery-grid--cols-3 {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (min-width: 1024px) {
  .gallery-grid--cols-3 {
    grid-template-columns: repeat(3, 1fr);
  }
}

.gallery-grid__empty {
  color: var(--text-muted);
  grid-column: 1 / -1;
  text-align: center;
}

/* === Cards === */
.gallery-card {
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.gallery-card.hidden {
  opacity: 0;
  transform: translateY(1rem);
}

.gallery-card.revealed {
  opacity: 1;
  transform: translateY(0);
}

.gallery-card__frame {
  aspect-ratio: 1 / 1;
  border-radius: 0.5rem;
  cursor: pointer;
  overflow: hidden;
  position: relative;
}

.gallery-card__img {
  height: 100%;
  inset: 0;
  object-fit: cover;
  position: absolute;
  transition: transform var(--transition-slow);
  width: 100%;
}

.gallery-card:hover .gallery-card__img,
.gallery-card.active .gallery-card__img {
  transform: scale(1.1);
}

.gallery-card__overlay {
  align-items: flex-end;
  background: var(--overlay);
  display: flex;
  inset: 0;
  padding: 1rem;
  pointer-events: none;
  position: absolute;
  transition: background var(--transition-fast);
}

.gallery-card:hover .gallery-card__overlay,
.gallery-card.active .gallery-card__overlay {
  background: var(--overlay-strong);
}

.gallery-card__title {
  font-size: 1.25rem;
  font-weight: 700;
  transform: translateY(1rem);
  transition: transform var(--transition-fast);
}

.gallery-card:hover .gallery-card__title,
.gallery-card.active .gallery-card__title {
  transform: translateY(0);
}
"#;
