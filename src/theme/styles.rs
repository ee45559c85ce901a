//! Global CSS styles for the Infinitum profile screen.
//!
//! Cosmic-purple theme: night background, purple-to-fuchsia gradients,
//! frosted glass cards.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night: #030712;
  --night-panel: #111827;
  --night-raised: #1f2937;
  --night-border: #374151;

  /* PURPLE (Frames, Highlights, Active state) */
  --purple: #a855f7;
  --purple-light: #c084fc;
  --purple-pale: #d8b4fe;
  --purple-deep: #7e22ce;
  --purple-glow: rgba(168, 85, 247, 0.3);
  --fuchsia: #d946ef;

  /* GOLD (Ratings, Legendary) */
  --gold: #fde047;

  /* TEXT */
  --text-primary: #f3f4f6;
  --text-secondary: #9ca3af;
  --text-muted: #6b7280;

  /* SEMANTIC */
  --good: #4ade80;
  --bad: #f87171;
  --rare-blue: #60a5fa;

  /* Gradients */
  --frame-gradient: linear-gradient(to bottom right, var(--purple), var(--purple-light), var(--fuchsia));
  --text-gradient: linear-gradient(to bottom right, var(--purple-pale), #e9d5ff, #f0abfc);

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;

  /* Transitions */
  --transition-fast: 200ms ease-in-out;
  --transition-normal: 300ms ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;
  background: var(--night);
  color: var(--text-primary);
  min-height: 100vh;
}

button {
  background: none;
  border: none;
  color: inherit;
  font: inherit;
  cursor: pointer;
}

/* === Shared utilities === */
.gradient-text {
  background-image: var(--text-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.glass {
  background: rgba(255, 255, 255, 0.1);
  backdrop-filter: blur(12px);
  border: 1px solid rgba(255, 255, 255, 0.2);
}

.lift-on-hover {
  transition: all var(--transition-normal);
}

.lift-on-hover:hover {
  transform: translateY(-0.25rem);
  box-shadow: 0 10px 15px -3px var(--purple-glow);
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 600;
  color: #e9d5ff;
  margin-bottom: 1rem;
}

.pill {
  color: #fff;
  font-size: var(--text-xs);
  padding: 0.25rem 0.5rem;
  border-radius: 9999px;
}

.gradient-pill {
  background-image: linear-gradient(to bottom right, var(--purple), var(--fuchsia));
  font-weight: 500;
}

.format-pill {
  background: var(--purple-deep);
}

/* === Screen === */
.profile-screen {
  position: relative;
  min-height: 100vh;
  padding-bottom: 5rem;
}

.profile-content {
  position: relative;
  z-index: 20;
  max-width: 48rem;
  margin: 0 auto;
  padding: 0 1rem;
}

/* === Cosmic Background === */
.cosmic-background {
  position: absolute;
  inset: 0;
  z-index: 0;
  overflow: hidden;
}

.cosmic-wash {
  position: absolute;
  inset: 0;
  background-image: linear-gradient(to bottom right, var(--night), #3b0764);
  background-size: 200% 200%;
  opacity: 0.5;
  animation: gradient-shift 15s ease infinite;
}

.particle {
  position: absolute;
  background: var(--purple-light);
  border-radius: 9999px;
  opacity: 0.5;
  animation-name: pulse;
  animation-iteration-count: infinite;
  animation-timing-function: cubic-bezier(0.4, 0, 0.6, 1);
}

@keyframes gradient-shift {
  0%, 100% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

/* === Hero === */
.hero-band {
  position: relative;
  z-index: 10;
  height: 13rem;
  background-image: var(--frame-gradient);
  border-radius: 0 0 1.5rem 1.5rem;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.4);
}

.hero-band-glow {
  position: absolute;
  inset: 0;
  opacity: 0.2;
  background-image: radial-gradient(circle at 50% 0%, rgba(255, 255, 255, 0.1) 0%, transparent 70%);
}

.hero-identity {
  position: relative;
  z-index: 20;
  margin-top: -6rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  margin-bottom: 2rem;
}

.avatar-ring {
  position: relative;
  width: 8rem;
  height: 8rem;
  border-radius: 9999px;
  background: var(--night-raised);
  display: flex;
  align-items: center;
  justify-content: center;
  border: 2px solid var(--purple-light);
  box-shadow: 0 10px 15px -3px rgba(168, 85, 247, 0.5);
  animation: pulse-slow 4s ease-in-out infinite;
}

.avatar-progress {
  position: absolute;
  inset: 0;
  border-radius: 9999px;
  border: 4px solid transparent;
  border-top-color: var(--purple-pale);
  border-right-color: var(--purple);
  animation: spin-slow 6s linear infinite;
}

.avatar-placeholder {
  width: 7rem;
  height: 7rem;
  border-radius: 9999px;
  background: #e5e7eb;
  border: 2px dashed var(--text-secondary);
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.avatar-glyph {
  color: var(--text-muted);
  font-size: 3rem;
}

.display-name {
  margin-top: 1rem;
  font-size: var(--text-3xl);
  font-weight: 700;
  letter-spacing: -0.025em;
}

.rank-line {
  margin-top: 0.25rem;
  color: var(--purple-pale);
  font-size: var(--text-lg);
  font-weight: 600;
}

@keyframes pulse-slow {
  0%, 100% { box-shadow: 0 10px 15px -3px rgba(168, 85, 247, 0.5); }
  50% { box-shadow: 0 10px 25px 0 rgba(168, 85, 247, 0.8); }
}

@keyframes spin-slow {
  to { transform: rotate(360deg); }
}

/* === Stats === */
.stats-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1rem;
  margin-bottom: 2rem;
}

.stat-card {
  border-radius: 0.75rem;
  padding: 1rem;
  text-align: center;
}

.stat-value {
  font-size: var(--text-3xl);
  font-weight: 700;
  margin-bottom: 0.25rem;
}

.stat-label {
  color: #d1d5db;
  font-size: var(--text-sm);
}

/* === Gradient Border Card === */
.gradient-frame {
  padding: 1px;
  border-radius: 0.75rem;
  background-image: var(--frame-gradient);
}

.gradient-panel {
  background: var(--night-panel);
  border-radius: 0.75rem;
  width: 100%;
  height: 100%;
}

/* === Content Cards === */
.content-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1rem;
  margin-bottom: 2rem;
}

.content-card {
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.content-preview {
  position: relative;
  height: 10rem;
  background: var(--night-raised);
  border-radius: 0.5rem;
  overflow: hidden;
}

.preview-placeholder {
  width: 100%;
  height: 100%;
  background: #e5e7eb;
  border: 2px dashed var(--text-secondary);
  border-radius: 0.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-muted);
  font-size: var(--text-xl);
}

.preview-shade {
  position: absolute;
  inset: 0;
  background-image: linear-gradient(to top, rgba(17, 24, 39, 0.7), transparent);
}

.preview-pills {
  position: absolute;
  bottom: 0.5rem;
  left: 0.5rem;
  display: flex;
  gap: 0.5rem;
}

.content-title {
  font-size: var(--text-xl);
  font-weight: 600;
  color: #f9fafb;
}

.content-description {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.relevance {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.relevance-track {
  width: 100%;
  height: 0.625rem;
  background: var(--night-border);
  border-radius: 9999px;
}

.relevance-fill {
  height: 0.625rem;
  border-radius: 9999px;
  background-image: linear-gradient(to right, var(--good), var(--purple-light));
}

.relevance-label {
  font-size: var(--text-xs);
  color: #d1d5db;
  white-space: nowrap;
}

.content-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-top: 0.5rem;
}

.content-meta {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.content-actions {
  display: flex;
  gap: 0.75rem;
  color: var(--text-secondary);
}

.icon-button {
  transition: color var(--transition-fast);
}

.icon-button:hover {
  color: var(--purple-light);
}

.rating {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  color: var(--gold);
}

/* === Achievements === */
.achievement-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
  margin-bottom: 2rem;
}

.achievement-tile {
  position: relative;
  padding: 1rem;
  border-radius: 0.75rem;
  text-align: center;
  transition: all var(--transition-normal);
}

.achievement-tile.unlocked {
  background: rgba(255, 255, 255, 0.1);
  backdrop-filter: blur(12px);
  border: 1px solid rgba(255, 255, 255, 0.2);
}

.achievement-tile.unlocked:hover {
  transform: translateY(-0.25rem);
  box-shadow: 0 10px 15px -3px var(--purple-glow);
}

.achievement-tile.locked {
  background: var(--night-raised);
  border: 1px solid var(--night-border);
  opacity: 0.7;
  cursor: not-allowed;
}

.lock-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(17, 24, 39, 0.7);
  border-radius: 0.75rem;
}

.lock-glyph {
  color: var(--text-muted);
  font-size: var(--text-2xl);
}

.achievement-icon {
  font-size: 3rem;
  margin-bottom: 0.5rem;
}

.achievement-icon.rarity-legendary {
  color: var(--gold);
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.achievement-icon.rarity-epic { color: var(--purple-light); }
.achievement-icon.rarity-rare { color: var(--rare-blue); }
.achievement-icon.rarity-common { color: var(--text-secondary); }

.achievement-name {
  font-size: var(--text-lg);
  font-weight: 600;
  color: #f9fafb;
  margin-bottom: 0.25rem;
}

.star-row {
  display: flex;
  justify-content: center;
  font-size: var(--text-sm);
}

.star { color: #4b5563; }
.star.filled { color: var(--gold); }

.earned-on {
  color: var(--text-muted);
  font-size: var(--text-xs);
  margin-top: 0.5rem;
}

/* === Astrology Widgets === */
.astrology-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1rem;
  margin-bottom: 5rem;
}

.widget {
  padding: 1rem;
}

.widget-title {
  font-size: var(--text-xl);
  font-weight: 600;
  color: #f9fafb;
  margin-bottom: 0.75rem;
}

.moon-line {
  color: var(--purple-pale);
  font-size: var(--text-lg);
  margin-bottom: 0.5rem;
}

.phase-line {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  margin-bottom: 1rem;
}

.forecast-block { margin-bottom: 0.5rem; }
.forecast-heading { color: #d1d5db; font-weight: 500; }
.forecast-good { color: var(--good); font-size: var(--text-sm); }
.forecast-bad { color: var(--bad); font-size: var(--text-sm); }

.calendar-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.75rem;
}

.calendar-header .widget-title { margin-bottom: 0; }

.calendar-arrow {
  color: var(--purple-light);
  transition: color var(--transition-fast);
}

.calendar-arrow:hover { color: var(--purple-pale); }

.calendar-weekdays,
.calendar-days {
  display: grid;
  grid-template-columns: repeat(7, 1fr);
  text-align: center;
}

.calendar-weekdays {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  font-weight: 500;
  margin-bottom: 0.5rem;
}

.calendar-days { color: #e5e7eb; }

.calendar-cell {
  position: relative;
  padding: 0.5rem;
  border-radius: 0.5rem;
}

.calendar-cell.day {
  cursor: pointer;
  transition: background var(--transition-fast);
}

.calendar-cell.day:hover { background: #6b21a8; }
.calendar-cell.full-moon { color: var(--gold); font-weight: 700; }
.calendar-cell.event { color: var(--purple-light); font-weight: 700; }

.day-mark {
  position: absolute;
  bottom: 0;
  left: 50%;
  transform: translateX(-50%);
  font-size: var(--text-xs);
}

/* === Mobile Navigation === */
.mobile-nav {
  position: fixed;
  bottom: 0;
  left: 0;
  right: 0;
  z-index: 50;
  max-width: 48rem;
  height: 4rem;
  margin: 0 auto;
  display: flex;
  justify-content: space-around;
  align-items: center;
  background: var(--night-panel);
  border-top: 1px solid var(--night-raised);
  border-radius: 1rem 1rem 0 0;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.nav-item {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  font-size: var(--text-xs);
  font-weight: 500;
  color: var(--text-secondary);
  transition: all var(--transition-fast);
}

.nav-item:hover { color: var(--purple-pale); }
.nav-item.active { color: var(--purple-light); }

.nav-item--magic {
  top: -1rem;
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 9999px;
  background-image: var(--frame-gradient);
  box-shadow: 0 10px 15px -3px rgba(168, 85, 247, 0.5);
  color: #fff;
}

.nav-item--magic:hover { transform: scale(1.05); color: #fff; }
.nav-item--magic:active { transform: scale(0.95); }

.nav-icon { font-size: var(--text-2xl); }
.nav-icon--magic { font-size: var(--text-3xl); }

.nav-icon.active {
  background-image: var(--text-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  animation: bounce-sm 1s ease-in-out infinite;
}

.nav-label { margin-top: 0.25rem; }
.nav-label.active { color: var(--purple-light); }

.nav-indicator {
  position: absolute;
  bottom: -0.25rem;
  left: 50%;
  transform: translateX(-50%);
  width: 2rem;
  height: 0.125rem;
  border-radius: 9999px;
  background-image: linear-gradient(to right, var(--purple-light), #e879f9);
}

@keyframes bounce-sm {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-3px); }
}

/* === Wider screens === */
@media (min-width: 768px) {
  .stats-grid { grid-template-columns: repeat(3, 1fr); }
  .content-grid { grid-template-columns: repeat(2, 1fr); }
  .achievement-grid { grid-template-columns: repeat(3, 1fr); }
  .astrology-grid { grid-template-columns: repeat(2, 1fr); }
}
"#;
