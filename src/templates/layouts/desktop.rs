use maud::{html, Markup, DOCTYPE};

const PAGE_CSS: &str = r#"
body {
  font-family: system-ui, sans-serif;
  max-width: 860px;
  margin: 0 auto;
  padding: 1rem;
  color: #1f2937;
}
header.site {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 0;
  border-bottom: 1px solid #e5e7eb;
}
.card {
  border: 1px solid #e5e7eb;
  border-radius: 8px;
  padding: 1.5rem;
  margin: 1.5rem 0;
  box-shadow: 0 1px 2px rgba(0,0,0,0.05);
}
.form-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 1rem;
}
.field label { display: block; font-weight: 600; margin-bottom: 0.25rem; }
.field input, .field select { width: 100%; padding: 0.5rem; box-sizing: border-box; }
.field.checkbox { display: flex; align-items: center; gap: 0.5rem; }
.field.checkbox label { margin: 0; }
button.primary {
  width: 100%;
  margin-top: 1.25rem;
  padding: 0.75rem;
  font-size: 1rem;
  cursor: pointer;
  background-color: #2563eb;
  color: white;
  border: none;
  border-radius: 6px;
}
button.primary:disabled { opacity: 0.6; cursor: wait; }
.alert { border-radius: 8px; padding: 1rem 1.25rem; margin-top: 1rem; }
.alert h3 { margin: 0 0 0.5rem; }
.alert-fraud { background: #fef2f2; border: 1px solid #fecaca; }
.alert-ok { background: #f0fdf4; border: 1px solid #bbf7d0; }
.alert-error { background: #fef2f2; border: 1px solid #fecaca; color: #991b1b; }
.alert-error ul { margin: 0.25rem 0 0; padding-left: 1.25rem; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PAGE_CSS) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header class="site" {
                    h3 { "Fraud Check" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
