//! Global CSS styles for the portfolio page.
//!
//! Behavior toggles only ever add or remove the classes `scrolled`,
//! `visible`, `active`, `fade-in` and `loaded`; what they look like is
//! decided here.

pub const GLOBAL_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500;600;700&display=swap');
@import url('https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css');

/* === CSS Custom Properties === */
:root {
  --primary: #14b8a6;
  --primary-dark: #0d9488;
  --primary-glow: rgba(20, 184, 166, 0.25);
  --danger: #ef4444;

  --text-dark: #0f172a;
  --text-body: #334155;
  --text-light: #64748b;

  --bg: #ffffff;
  --bg-soft: #f8fafc;
  --border: #e2e8f0;

  --font: 'Poppins', sans-serif;
  --radius: 12px;
  --shadow: 0 8px 32px rgba(0, 0, 0, 0.08);

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font);
  background: var(--bg);
  color: var(--text-body);
  line-height: 1.7;
}

a {
  color: inherit;
  text-decoration: none;
}

section {
  padding: 100px 8%;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: 80px;
  z-index: 1000;
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.navbar.scrolled {
  background: rgba(255, 255, 255, 0.95);
  box-shadow: 0 2px 20px rgba(0, 0, 0, 0.08);
  backdrop-filter: blur(10px);
}

.nav-container {
  height: 100%;
  padding: 0 8%;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-dark);
}

.logo-dot {
  color: var(--primary);
}

.nav-menu {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  position: relative;
  font-weight: 500;
  color: var(--text-body);
  transition: color var(--transition-fast);
}

.nav-link::after {
  content: '';
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 0;
  height: 2px;
  background: var(--primary);
  transition: width var(--transition-normal);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

.nav-link.active::after {
  width: 100%;
}

.hamburger {
  display: none;
  cursor: pointer;
}

.hamburger .bar {
  display: block;
  width: 25px;
  height: 3px;
  margin: 5px auto;
  background: var(--text-dark);
  transition: all var(--transition-normal);
}

.hamburger.active .bar:nth-child(2) {
  opacity: 0;
}

.hamburger.active .bar:nth-child(1) {
  transform: translateY(8px) rotate(45deg);
}

.hamburger.active .bar:nth-child(3) {
  transform: translateY(-8px) rotate(-45deg);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 14px 32px;
  border-radius: 50px;
  font-family: var(--font);
  font-size: 1rem;
  font-weight: 500;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.btn-primary {
  background: var(--primary);
  color: #fff;
  border: 2px solid var(--primary);
}

.btn-primary:hover {
  background: var(--primary-dark);
  box-shadow: 0 10px 30px var(--primary-glow);
  transform: translateY(-2px);
}

.btn-secondary {
  background: transparent;
  color: var(--primary);
  border: 2px solid var(--primary);
}

.btn-secondary:hover {
  background: var(--primary);
  color: #fff;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  overflow: hidden;
  background: linear-gradient(135deg, var(--bg-soft) 0%, #ecfeff 100%);
}

.hero-container {
  position: relative;
  z-index: 1;
  width: 100%;
  display: grid;
  grid-template-columns: 1.2fr 1fr;
  gap: 4rem;
  align-items: center;
}

.hero-greeting {
  color: var(--primary);
  font-weight: 500;
}

.hero-title {
  font-size: 3.2rem;
  line-height: 1.2;
  color: var(--text-dark);
}

.highlight {
  color: var(--primary);
}

.hero-subtitle {
  margin: 1.5rem 0 2rem;
  font-size: 1.1rem;
  color: var(--text-light);
}

.hero-buttons {
  display: flex;
  gap: 1rem;
  flex-wrap: wrap;
}

.illustration-card {
  width: 320px;
  height: 320px;
  margin: 0 auto;
  border-radius: 40% 60% 55% 45%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 6rem;
  color: #fff;
  background: linear-gradient(135deg, var(--primary), var(--primary-dark));
  box-shadow: 0 30px 60px var(--primary-glow);
}

.floating-shape {
  position: absolute;
  border-radius: 50%;
  opacity: 0.12;
  background: var(--primary);
  will-change: transform;
}

.shape-0 { width: 300px; height: 300px; top: -80px; right: -60px; }
.shape-1 { width: 180px; height: 180px; bottom: 10%; left: -40px; }
.shape-2 { width: 90px; height: 90px; top: 30%; left: 45%; }
.shape-3 { width: 140px; height: 140px; bottom: -30px; right: 25%; }

/* === Loading State === */
.page:not(.loaded) .hero-content,
.page:not(.loaded) .hero-illustration {
  opacity: 0;
}

.page.loaded .hero-content,
.page.loaded .hero-illustration {
  transition: opacity 0.6s ease, transform 0.6s ease;
}

/* === Sections === */
.section-header {
  text-align: center;
  margin-bottom: 3.5rem;
}

.section-title {
  font-size: 2.4rem;
  color: var(--text-dark);
}

.section-subtitle {
  color: var(--text-light);
}

.about-content {
  max-width: 760px;
  margin: 0 auto;
  font-size: 1.05rem;
}

.about-content p + p {
  margin-top: 1rem;
}

.projects {
  background: var(--bg-soft);
}

.projects-grid,
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 2rem;
}

.project-card,
.skill-card {
  padding: 2rem;
  background: var(--bg);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
}

.project-card {
  transition: all 0.3s ease;
}

.project-card:hover {
  transform: translateY(-8px);
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
}

.project-icon,
.skill-card > i {
  font-size: 2rem;
  color: var(--primary);
  margin-bottom: 1rem;
}

.project-card h3,
.skill-card h3 {
  color: var(--text-dark);
  margin-bottom: 0.5rem;
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1rem;
}

.tag {
  padding: 4px 12px;
  border-radius: 50px;
  font-size: 0.8rem;
  color: var(--primary-dark);
  background: var(--primary-glow);
}

/* === Fade-in Reveal === */
.fade-in {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.fade-in.visible {
  opacity: 1;
  transform: translateY(0);
}

/* === Contact === */
.contact-content {
  display: grid;
  grid-template-columns: 1fr 1.5fr;
  gap: 3rem;
}

.contact-item {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.contact-item i {
  color: var(--primary);
  font-size: 1.25rem;
}

.form-group {
  margin-bottom: 1.25rem;
}

.form-group label {
  display: block;
  margin-bottom: 0.4rem;
  font-weight: 500;
  color: var(--text-dark);
}

.form-group input,
.form-group textarea {
  width: 100%;
  padding: 14px 18px;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  font-family: var(--font);
  font-size: 1rem;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-group input:focus,
.form-group textarea:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 4px var(--primary-glow);
}

/* === Footer === */
.footer {
  padding: 2rem 8%;
  text-align: center;
  color: #cbd5e1;
  background: var(--text-dark);
}

.footer-text i {
  color: var(--danger);
}

/* === Scroll To Top === */
.scroll-top {
  position: fixed;
  right: 30px;
  bottom: 30px;
  width: 50px;
  height: 50px;
  border: none;
  border-radius: 50%;
  cursor: pointer;
  color: #fff;
  background: var(--primary);
  box-shadow: 0 8px 24px var(--primary-glow);
  opacity: 0;
  visibility: hidden;
  transform: translateY(20px);
  transition: all var(--transition-normal);
}

.scroll-top.visible {
  opacity: 1;
  visibility: visible;
  transform: translateY(0);
}

/* === Notification === */
.notification {
  position: fixed;
  top: 100px;
  right: 30px;
  z-index: 10000;
  padding: 16px 24px;
  border-radius: var(--radius);
  color: white;
  box-shadow: 0 8px 32px rgba(0, 0, 0, 0.15);
}

.notification-content {
  display: flex;
  align-items: center;
  gap: 12px;
  font-family: var(--font);
  font-size: 0.95rem;
}

.notification-content i {
  font-size: 1.25rem;
}

@keyframes slideIn {
  from { transform: translateX(400px); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOut {
  from { transform: translateX(0); opacity: 1; }
  to { transform: translateX(400px); opacity: 0; }
}

/* === Mobile === */
@media (max-width: 768px) {
  .hamburger {
    display: block;
  }

  .nav-menu {
    position: fixed;
    top: 80px;
    left: -100%;
    width: 100%;
    height: calc(100vh - 80px);
    flex-direction: column;
    align-items: center;
    padding-top: 3rem;
    background: var(--bg);
    transition: left var(--transition-normal);
  }

  .nav-menu.active {
    left: 0;
  }

  .hero-container,
  .contact-content {
    grid-template-columns: 1fr;
  }

  .hero-title {
    font-size: 2.4rem;
  }
}
"#;
