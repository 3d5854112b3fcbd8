use crate::models::DashboardView;

pub fn render_index(view: &DashboardView) -> String {
    let state = serde_json::to_string(view)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/");
    let user = match &view.username {
        Some(username) => format!("Signed in as: {}", escape_html(username)),
        None => String::new(),
    };
    INDEX_HTML
        .replace("{{USER}}", &user)
        .replace("{{STATE}}", &state)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Link Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 24px;
    }

    form {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    input {
      flex: 1 1 160px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 999px;
      padding: 12px 16px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.secondary {
      background: var(--accent-2);
    }

    .links {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 6px;
    }

    .links li {
      padding: 8px 14px;
      border-radius: 14px;
      cursor: pointer;
      background: white;
    }

    .links li.selected {
      background: var(--accent-2);
      color: white;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .error {
      color: #c63b2b;
    }

    .hidden {
      display: none;
    }
  </style>
</head>
<body>
  <main class="app">
    <div class="row">
      <section>
        <h1>Shorten a link</h1>
        <p class="subtitle">Paste a long URL and press the button.</p>
        <form id="shorten-form" autocomplete="off">
          <input type="text" id="long-url" placeholder="Long URL..." />
          <button type="submit">Shorten</button>
        </form>
        <p class="error" id="error"></p>
        <p id="latest" class="hidden">Your short link: <a target="_blank" id="latest-link"></a></p>
      </section>

      <section id="session">
        <p id="user">{{USER}}</p>
        <form id="auth-form" autocomplete="off">
          <input type="text" id="username" placeholder="Username" />
          <input type="password" id="password" placeholder="Password" />
          <button type="submit" id="auth-submit">Log in</button>
        </form>
        <p><a href="/" id="mode-toggle">Register</a></p>
        <button class="secondary hidden" id="logout">Log out</button>
      </section>
    </div>

    <section id="statistics" class="hidden">
      <h2>Statistics</h2>
      <div class="row">
        <div>
          <h3>Your links</h3>
          <ul class="links" id="links"></ul>
        </div>
        <div id="details" class="hidden">
          <button id="refresh">Refresh</button>
          <button class="secondary" id="remove">Remove</button>
          <p>Short: <a target="_blank" id="short-link"></a></p>
          <p>Long: <a target="_blank" id="long-link"></a></p>
          <p>Clicks: <span id="total">0</span></p>
          <div class="chart-card">
            <svg id="chart" viewBox="0 0 600 260" aria-label="Last 30 days" role="img"></svg>
          </div>
        </div>
      </div>
    </section>
  </main>

  <script>
    let view = {{STATE}};

    const byId = (id) => document.getElementById(id);
    const show = (el, visible) => el.classList.toggle('hidden', !visible);

    const renderLineChart = (labels, values) => {
      const chartEl = byId('chart');
      if (!values.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const max = Math.max(1, ...values);
      const xStep = values.length > 1 ? (width - paddingX * 2) / (values.length - 1) : 0;
      const scaleY = (height - top - paddingY) / max;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - value * scaleY;

      const path = values
        .map((value, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(value).toFixed(2)}`)
        .join(' ');

      let grid = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = (max * i) / 4;
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${y(value)}" x2="${width - paddingX}" y2="${y(value)}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${y(value) + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const xLabels = labels
        .map((label, index) => index % 3 === 2
          ? `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${label}</text>`
          : '')
        .join('');

      chartEl.innerHTML = `${grid}<path class="chart-line" d="${path}" />${xLabels}`;
    };

    const render = () => {
      const loggedIn = view.username !== null;
      byId('user').textContent = loggedIn ? `Signed in as: ${view.username}` : '';
      byId('error').textContent = view.error || '';
      show(byId('auth-form'), !loggedIn);
      show(byId('mode-toggle'), !loggedIn);
      show(byId('logout'), loggedIn);
      byId('auth-submit').textContent = view.mode === 'register' ? 'Register' : 'Log in';
      byId('mode-toggle').textContent = view.mode === 'register' ? 'Log in' : 'Register';

      show(byId('latest'), view.latest !== null);
      if (view.latest) {
        byId('latest-link').textContent = view.latest.short_url;
        byId('latest-link').href = view.latest.short_url;
      }

      show(byId('statistics'), loggedIn);
      const list = byId('links');
      list.innerHTML = '';
      view.links.forEach((link, index) => {
        const item = document.createElement('li');
        item.textContent = link.short;
        item.classList.toggle('selected', link.selected);
        item.addEventListener('click', () => send('/api/select', { index }));
        list.appendChild(item);
      });

      const selected = view.links.find((link) => link.selected);
      show(byId('details'), selected !== undefined);
      if (selected) {
        byId('short-link').textContent = selected.short;
        byId('short-link').href = selected.short_url;
      }
      const analytics = view.analytics;
      byId('long-link').textContent = analytics ? analytics.long_url : '';
      byId('long-link').href = analytics ? analytics.long_url : '#';
      byId('total').textContent = analytics ? analytics.total : 0;
      renderLineChart(analytics ? analytics.labels : [], analytics ? analytics.values : []);
    };

    const send = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        return;
      }
      view = await res.json();
      render();
    };

    byId('shorten-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const longUrl = byId('long-url').value;
      if (longUrl.length === 0) {
        return;
      }
      send('/api/shorten', { long_url: longUrl });
    });

    byId('auth-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const credentials = {
        username: byId('username').value,
        password: byId('password').value
      };
      send(view.mode === 'register' ? '/api/register' : '/api/login', credentials);
    });

    byId('mode-toggle').addEventListener('click', (event) => {
      event.preventDefault();
      send('/api/mode');
    });

    byId('logout').addEventListener('click', () => send('/api/logout'));
    byId('refresh').addEventListener('click', () => send('/api/refresh'));
    byId('remove').addEventListener('click', () => send('/api/remove'));

    render();
  </script>
</body>
</html>
"#;
