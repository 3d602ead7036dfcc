use crate::controls::ControlView;
use crate::dashboard::Dashboard;
use crate::errors::{AppError, DashboardError};

/// Element id of the canvas Chart.js draws on.
pub const SURFACE_ID: &str = "trendsChart";

pub fn verify_surface() -> Result<(), DashboardError> {
    if INDEX_HTML.contains(&format!("id=\"{SURFACE_ID}\"")) {
        Ok(())
    } else {
        Err(DashboardError::MissingSurface(SURFACE_ID))
    }
}

pub fn render_index(dashboard: &Dashboard) -> Result<String, AppError> {
    verify_surface()?;
    let snapshot = dashboard.snapshot();
    // Keep "</script>" in data from closing the JSON block early.
    let state_json = serde_json::to_string(&snapshot)
        .map_err(AppError::internal)?
        .replace("</", "<\\/");

    Ok(INDEX_HTML
        .replace("{{TABS}}", &render_buttons(&snapshot.tabs, "tab", "data-tab"))
        .replace("{{RANGES}}", &render_buttons(&snapshot.ranges, "date-btn", "data-range"))
        .replace("{{STATE}}", &state_json))
}

fn render_buttons(views: &[ControlView], class: &str, attribute: &str) -> String {
    views
        .iter()
        .map(|view| {
            let active = if view.is_active { " active" } else { "" };
            format!(
                r#"<button class="{class}{active}" type="button" {attribute}="{key}" aria-pressed="{pressed}">{label}</button>"#,
                key = view.key,
                pressed = view.is_active,
                label = view.label,
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Reports</title>
  <script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>
  <style>
    :root {
      --bg: #f4f6fb;
      --ink: #1f2937;
      --muted: #6b7280;
      --blue: rgb(59, 130, 246);
      --green: rgb(34, 197, 94);
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(31, 41, 55, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1040px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 3vw, 2.4rem);
    }

    .subtitle {
      margin: 6px 0 0;
      color: var(--muted);
    }

    .tabs,
    .date-range {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(31, 41, 55, 0.06);
      border-radius: 12px;
      width: fit-content;
    }

    button {
      appearance: none;
      border: none;
      background: transparent;
      border-radius: 8px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
    }

    button.active {
      background: var(--card);
      color: var(--blue);
      box-shadow: 0 4px 10px rgba(31, 41, 55, 0.1);
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      padding: 20px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 16px;
    }

    .card-header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
    }

    .card-header h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 12px;
    }

    .metric {
      border: 1px solid rgba(31, 41, 55, 0.08);
      border-radius: 12px;
      padding: 14px;
    }

    .metric .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .metric .value {
      display: block;
      margin-top: 6px;
      font-size: 1.4rem;
      font-weight: 600;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #c53030;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Reports</h1>
      <p class="subtitle">Article engagement trends.</p>
    </header>

    <nav class="tabs" role="tablist">
          {{TABS}}
    </nav>

    <section class="card">
      <div class="card-header">
        <h2>Comments vs. articles</h2>
        <div class="date-range">
          {{RANGES}}
        </div>
      </div>
      <canvas id="trendsChart" height="120"></canvas>
      <div class="metrics">
        <div class="metric">
          <span class="label">Months</span>
          <span class="value" id="metric-periods">--</span>
        </div>
        <div class="metric">
          <span class="label">Articles published</span>
          <span class="value" id="metric-articles">--</span>
        </div>
        <div class="metric">
          <span class="label">Avg comments</span>
          <span class="value" id="metric-comments">--</span>
        </div>
        <div class="metric">
          <span class="label">Busiest month</span>
          <span class="value" id="metric-peak">--</span>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script type="application/json" id="dashboard-state">{{STATE}}</script>
  <script>
    document.addEventListener('DOMContentLoaded', () => {
      const statusEl = document.getElementById('status');
      const tabs = Array.from(document.querySelectorAll('.tab'));
      const dateButtons = Array.from(document.querySelectorAll('.date-btn'));

      const setStatus = (message, type) => {
        statusEl.textContent = message;
        statusEl.dataset.type = type || '';
      };

      const surface = document.getElementById('trendsChart');
      if (!surface) {
        setStatus('rendering surface #trendsChart not found', 'error');
        throw new Error('rendering surface #trendsChart not found');
      }

      const initial = JSON.parse(document.getElementById('dashboard-state').textContent);
      const trendsChart = new Chart(surface.getContext('2d'), initial.chart);

      const markActive = (buttons, views, attribute) => {
        buttons.forEach((button) => {
          const view = views.find((item) => item.key === button.dataset[attribute]);
          const isActive = Boolean(view && view.is_active);
          button.classList.toggle('active', isActive);
          button.setAttribute('aria-pressed', String(isActive));
        });
      };

      const setMetrics = (summary) => {
        document.getElementById('metric-periods').textContent = summary.periods;
        document.getElementById('metric-articles').textContent = summary.total_articles;
        document.getElementById('metric-comments').textContent =
          summary.mean_avg_comments.toFixed(1);
        document.getElementById('metric-peak').textContent =
          summary.peak_comments ? summary.peak_comments.label : '--';
      };

      const applySnapshot = (snapshot) => {
        markActive(tabs, snapshot.tabs, 'tab');
        markActive(dateButtons, snapshot.ranges, 'range');
        trendsChart.data.labels = snapshot.chart.data.labels;
        trendsChart.data.datasets[0].data = snapshot.chart.data.datasets[0].data;
        trendsChart.data.datasets[1].data = snapshot.chart.data.datasets[1].data;
        trendsChart.update();
        setMetrics(snapshot.summary);
      };

      const post = async (path, body) => {
        const res = await fetch(path, {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(body)
        });
        if (!res.ok) {
          const msg = await res.text();
          throw new Error(msg || 'Request failed');
        }
        applySnapshot(await res.json());
        setStatus('', '');
      };

      tabs.forEach((button) => {
        button.addEventListener('click', () => {
          post('/api/tab', { tab: button.dataset.tab })
            .catch((err) => setStatus(err.message, 'error'));
        });
      });

      dateButtons.forEach((button) => {
        button.addEventListener('click', () => {
          post('/api/range', { range: button.dataset.range })
            .catch((err) => setStatus(err.message, 'error'));
        });
      });

      setMetrics(initial.summary);
    });
  </script>
</body>
</html>
"#;
