pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Goal Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --good: #2d7a4b;
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
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .topbar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      box-shadow: none;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    input, select {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
      width: 100%;
    }

    label {
      font-size: 0.85rem;
      font-weight: 600;
      color: #6b645d;
      display: grid;
      gap: 6px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-quiet {
      background: var(--accent-2);
      color: white;
    }

    .btn-danger {
      background: transparent;
      color: #c63b2b;
      border: 1px solid rgba(198, 59, 43, 0.4);
      padding: 8px 14px;
    }

    .stack {
      display: grid;
      gap: 12px;
    }

    .row {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: end;
    }

    .row > label {
      flex: 1 1 160px;
    }

    .panel {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
    }

    .metric {
      display: flex;
      align-items: baseline;
      gap: 10px;
    }

    .metric .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .bar {
      height: 10px;
      width: 100%;
      background: rgba(47, 72, 88, 0.12);
      border-radius: 999px;
      overflow: hidden;
    }

    .bar span {
      display: block;
      height: 100%;
      background: var(--accent);
      border-radius: 999px;
      transition: width 300ms ease;
    }

    .goal {
      display: grid;
      gap: 10px;
    }

    .goal-head {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 8px;
    }

    .goal-title {
      font-weight: 600;
      font-size: 1.05rem;
    }

    .goal-meta {
      font-size: 0.8rem;
      color: #8b857d;
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    .goal.done .goal-title {
      color: var(--good);
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      align-items: center;
    }

    .controls input {
      width: 120px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: var(--good);
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    details summary {
      cursor: pointer;
      font-weight: 600;
      color: var(--accent-2);
    }

    .hidden {
      display: none;
    }

    .burst {
      position: fixed;
      font-size: 1.6rem;
      pointer-events: none;
      animation: fall 1200ms ease-in forwards;
      z-index: 10;
    }

    @keyframes fall {
      from {
        transform: translateY(-10vh) rotate(0deg);
        opacity: 1;
      }
      to {
        transform: translateY(70vh) rotate(340deg);
        opacity: 0;
      }
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <section id="auth-view">
      <header>
        <h1>Goal Tracker</h1>
        <p class="subtitle">Sign in to track your resolutions.</p>
      </header>
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-auth-tab="login">Login</button>
        <button class="tab" type="button" data-auth-tab="signup">Sign Up</button>
      </div>
      <form id="auth-form" class="stack">
        <label>Username
          <input id="auth-username" autocomplete="username" required />
        </label>
        <label>Password
          <input id="auth-password" type="password" autocomplete="current-password" required />
        </label>
        <button class="btn-primary" type="submit" id="auth-submit">Enter</button>
      </form>
    </section>

    <section id="dash-view" class="hidden">
      <div class="topbar">
        <div>
          <h1>My Goals</h1>
          <p class="subtitle">Signed in as <strong id="handle"></strong></p>
        </div>
        <button class="btn-quiet" type="button" id="logout-btn">Logout</button>
      </div>

      <div class="panel">
        <div class="metric">
          <span class="value" id="summary">0 / 0</span>
          <span class="subtitle">goals completed</span>
        </div>
        <div class="bar"><span id="summary-bar" style="width: 0%"></span></div>
      </div>

      <div class="panel">
        <strong>Add Goal</strong>
        <form id="add-form" class="stack">
          <div class="row">
            <label>Title
              <input id="goal-title" required />
            </label>
            <label>Category
              <select id="goal-category">
                <option value="Health">Health</option>
                <option value="Finance">Finance</option>
                <option value="Learning">Learning</option>
                <option value="Personal">Personal</option>
                <option value="Other">Other</option>
              </select>
            </label>
            <label>Mode
              <select id="goal-mode">
                <option value="Binary">Binary</option>
                <option value="Numeric">Numeric</option>
                <option value="Percentage">Percentage</option>
              </select>
            </label>
            <label id="target-field" class="hidden">Target
              <input id="goal-target" type="number" step="any" min="0" />
            </label>
            <button class="btn-primary" type="submit">Save</button>
          </div>
        </form>
      </div>

      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-goal-tab="active">Active</button>
        <button class="tab" type="button" data-goal-tab="finished">Finished</button>
      </div>
      <div class="stack" id="goal-list"></div>
      <p class="hint hidden" id="empty-hint">Start by adding a goal.</p>

      <details class="panel">
        <summary>Account</summary>
        <form id="password-form" class="row">
          <label>New password
            <input id="new-password" type="password" autocomplete="new-password" required />
          </label>
          <button class="btn-quiet" type="submit">Change password</button>
        </form>
        <form id="email-form" class="row">
          <label>Email
            <input id="new-email" type="email" required />
          </label>
          <button class="btn-quiet" type="submit">Save email</button>
        </form>
      </details>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const authView = document.getElementById('auth-view');
    const dashView = document.getElementById('dash-view');
    const statusEl = document.getElementById('status');
    const goalList = document.getElementById('goal-list');
    const emptyHint = document.getElementById('empty-hint');
    const targetField = document.getElementById('target-field');

    let token = null;
    let handle = '';
    let authMode = 'login';
    let goalTab = 'active';
    let goals = [];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (type === 'ok') {
        setTimeout(() => { statusEl.textContent = ''; }, 1500);
      }
    };

    const api = async (method, path, body) => {
      const headers = { 'content-type': 'application/json' };
      if (token) {
        headers['authorization'] = 'Bearer ' + token;
      }
      const res = await fetch(path, {
        method,
        headers,
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'request failed');
      }
      if (res.status === 204) {
        return null;
      }
      return res.json();
    };

    const celebrate = () => {
      for (let i = 0; i < 18; i += 1) {
        const piece = document.createElement('span');
        piece.className = 'burst';
        piece.textContent = ['🎉', '⭐', '🎊'][i % 3];
        piece.style.left = Math.random() * 100 + 'vw';
        piece.style.animationDelay = Math.random() * 300 + 'ms';
        document.body.appendChild(piece);
        setTimeout(() => piece.remove(), 1600);
      }
    };

    const showDashboard = () => {
      authView.classList.add('hidden');
      dashView.classList.remove('hidden');
      document.getElementById('handle').textContent = handle;
    };

    const showLogin = () => {
      token = null;
      goals = [];
      dashView.classList.add('hidden');
      authView.classList.remove('hidden');
    };

    const renderGoals = () => {
      const wantDone = goalTab === 'finished';
      const shown = goals.filter((goal) => goal.completed === wantDone);
      goalList.innerHTML = '';
      emptyHint.classList.toggle('hidden', goals.length > 0);

      shown.forEach((goal) => {
        const card = document.createElement('div');
        card.className = 'panel goal' + (goal.completed ? ' done' : '');

        const head = document.createElement('div');
        head.className = 'goal-head';
        const title = document.createElement('span');
        title.className = 'goal-title';
        title.textContent = goal.title;
        const meta = document.createElement('span');
        meta.className = 'goal-meta';
        meta.textContent = [goal.category, goal.mode].filter(Boolean).join(' · ');
        head.append(title, meta);
        card.append(head);

        const bar = document.createElement('div');
        bar.className = 'bar';
        const fill = document.createElement('span');
        fill.style.width = (goal.fraction * 100).toFixed(0) + '%';
        bar.append(fill);
        card.append(bar);

        const controls = document.createElement('div');
        controls.className = 'controls';

        if (!goal.completed && goal.mode === 'Binary') {
          const doneBtn = document.createElement('button');
          doneBtn.className = 'btn-primary';
          doneBtn.textContent = 'Done';
          doneBtn.onclick = () => completeGoal(goal.id);
          controls.append(doneBtn);
        } else if (!goal.completed) {
          const input = document.createElement('input');
          input.type = 'number';
          input.step = 'any';
          input.value = goal.current;
          const save = document.createElement('button');
          save.className = 'btn-quiet';
          save.textContent = 'Save';
          save.onclick = () => saveProgress(goal.id, parseFloat(input.value));
          const label = document.createElement('span');
          label.className = 'goal-meta';
          label.textContent = 'of ' + goal.target;
          controls.append(input, label, save);
        }

        const del = document.createElement('button');
        del.className = 'btn-danger';
        del.textContent = 'Delete';
        del.onclick = () => deleteGoal(goal.id);
        controls.append(del);
        card.append(controls);

        goalList.append(card);
      });
    };

    const refresh = async () => {
      const data = await api('GET', '/api/goals');
      goals = data.goals;
      document.getElementById('summary').textContent = data.done + ' / ' + data.total;
      const pct = data.total === 0 ? 0 : (data.done / data.total) * 100;
      document.getElementById('summary-bar').style.width = pct.toFixed(0) + '%';
      renderGoals();
    };

    const saveProgress = async (id, value) => {
      if (!Number.isFinite(value)) {
        setStatus('enter a number first', 'error');
        return;
      }
      try {
        const data = await api('POST', '/api/goals/' + id + '/progress', { value });
        if (data.transition === 'completed') {
          celebrate();
        }
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const completeGoal = async (id) => {
      try {
        const data = await api('POST', '/api/goals/' + id + '/complete');
        if (data.transition === 'completed') {
          celebrate();
        }
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const deleteGoal = async (id) => {
      try {
        await api('DELETE', '/api/goals/' + id);
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.querySelectorAll('[data-auth-tab]').forEach((button) => {
      button.addEventListener('click', () => {
        authMode = button.dataset.authTab;
        document.querySelectorAll('[data-auth-tab]').forEach((other) => {
          other.classList.toggle('active', other === button);
        });
        document.getElementById('auth-submit').textContent =
          authMode === 'login' ? 'Enter' : 'Register';
      });
    });

    document.querySelectorAll('[data-goal-tab]').forEach((button) => {
      button.addEventListener('click', () => {
        goalTab = button.dataset.goalTab;
        document.querySelectorAll('[data-goal-tab]').forEach((other) => {
          other.classList.toggle('active', other === button);
        });
        renderGoals();
      });
    });

    document.getElementById('goal-mode').addEventListener('change', (event) => {
      targetField.classList.toggle('hidden', event.target.value !== 'Numeric');
    });

    document.getElementById('auth-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const username = document.getElementById('auth-username').value;
      const password = document.getElementById('auth-password').value;
      try {
        if (authMode === 'signup') {
          await api('POST', '/api/signup', { username, password });
          setStatus('registered, you can sign in now', 'ok');
          return;
        }
        const data = await api('POST', '/api/login', { username, password });
        token = data.token;
        handle = data.handle;
        showDashboard();
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('logout-btn').addEventListener('click', async () => {
      try {
        await api('POST', '/api/logout');
      } catch (err) {
        // Session is gone either way.
      }
      showLogin();
    });

    document.getElementById('add-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const mode = document.getElementById('goal-mode').value;
      const rawTarget = document.getElementById('goal-target').value;
      const body = {
        title: document.getElementById('goal-title').value,
        category: document.getElementById('goal-category').value,
        mode,
        target: mode === 'Numeric' && rawTarget !== '' ? parseFloat(rawTarget) : null
      };
      try {
        await api('POST', '/api/goals', body);
        document.getElementById('goal-title').value = '';
        document.getElementById('goal-target').value = '';
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('password-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        await api('POST', '/api/account/password', {
          password: document.getElementById('new-password').value
        });
        document.getElementById('new-password').value = '';
        setStatus('password changed', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('email-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        await api('POST', '/api/account/email', {
          email: document.getElementById('new-email').value
        });
        setStatus('email saved', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });
  </script>
</body>
</html>
"#;
