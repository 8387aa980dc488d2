use crate::models::{valid_dead_hang, TodayResponse};

pub fn render_index(today: &TodayResponse) -> String {
    // Stored files can be edited by hand, so only a well-formed time is inlined.
    let hang = if valid_dead_hang(&today.dead_hang) {
        today.dead_hang.as_str()
    } else {
        "--"
    };
    INDEX_HTML
        .replace("{{DATE}}", &today.date)
        .replace("{{PUSHUPS}}", &today.pushups.value.to_string())
        .replace("{{PULLUPS}}", &today.pullups.value.to_string())
        .replace("{{SQUATS}}", &today.squats.value.to_string())
        .replace("{{GOAL_PUSHUPS}}", &today.pushups.goal.to_string())
        .replace("{{GOAL_PULLUPS}}", &today.pullups.goal.to_string())
        .replace("{{GOAL_SQUATS}}", &today.squats.goal.to_string())
        .replace("{{DEAD_HANG}}", hang)
        .replace("{{STREAK}}", &today.streak.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Rep Tracker</title>
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
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.25rem;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .streak {
      justify-self: start;
      align-self: start;
      margin-top: 8px;
      background: rgba(255, 107, 74, 0.14);
      color: var(--accent);
      border-radius: 999px;
      padding: 6px 14px;
      font-weight: 600;
      font-size: 0.95rem;
    }

    section {
      display: grid;
      gap: 14px;
    }

    .rings {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 16px;
      align-items: start;
    }

    .ring {
      display: grid;
      gap: 8px;
      justify-items: center;
    }

    .ring-dial {
      position: relative;
      width: 124px;
    }

    .ring-dial svg {
      display: block;
      width: 100%;
      height: auto;
    }

    .ring-track {
      fill: none;
      stroke: rgba(47, 72, 88, 0.12);
      stroke-width: 8;
    }

    .ring-fill {
      fill: none;
      stroke: var(--accent);
      stroke-width: 8;
      stroke-linecap: round;
      stroke-dasharray: 283;
      stroke-dashoffset: 283;
      transform: rotate(-90deg);
      transform-origin: 50% 50%;
      transition: stroke-dashoffset 400ms ease;
    }

    .progress-label {
      position: absolute;
      inset: 0;
      display: grid;
      place-items: center;
      font-weight: 600;
      color: var(--accent-2);
    }

    .ring-name {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .form-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 12px;
    }

    .form-grid label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      font-weight: 600;
      color: #6b645d;
    }

    input {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      font: inherit;
      background: white;
      color: var(--ink);
    }

    input:focus {
      outline: 2px solid var(--accent);
      border-color: transparent;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-save {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
      justify-self: start;
    }

    .btn-delete {
      background: #c63b2b;
      color: white;
      box-shadow: 0 10px 24px rgba(198, 59, 43, 0.25);
    }

    .btn-ghost {
      background: transparent;
      color: var(--accent-2);
      border: 1px solid rgba(47, 72, 88, 0.25);
      box-shadow: none;
    }

    .calendar-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .calendar-header h2 {
      font-size: 1.4rem;
    }

    .nav {
      background: white;
      color: var(--accent-2);
      border: 1px solid rgba(47, 72, 88, 0.15);
      border-radius: 999px;
      width: 40px;
      height: 40px;
      padding: 0;
      font-size: 1.1rem;
      box-shadow: none;
    }

    .calendar-head {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      text-align: center;
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b857d;
    }

    .calendar {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .calendar-day {
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 12px;
      min-height: 72px;
      padding: 6px;
      display: grid;
      gap: 2px;
      align-content: start;
      cursor: pointer;
      transition: border-color 150ms ease;
    }

    .calendar-day:hover {
      border-color: var(--accent);
    }

    .calendar-day.outside {
      opacity: 0.45;
    }

    .calendar-day.today {
      outline: 2px solid var(--accent);
      outline-offset: -2px;
    }

    .date-label {
      font-size: 0.8rem;
      font-weight: 600;
      color: #6b645d;
    }

    .emoji-indicators {
      display: flex;
      gap: 2px;
      font-size: 0.7rem;
    }

    .dead-hang-label {
      font-size: 0.7rem;
      color: var(--accent-2);
    }

    .summary {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      line-height: 1.8;
      font-size: 0.95rem;
    }

    .summary strong {
      color: var(--accent-2);
    }

    .editor {
      position: fixed;
      inset: 0;
      display: grid;
      place-items: center;
      background: rgba(43, 42, 40, 0.45);
      padding: 18px;
      z-index: 10;
    }

    .editor[hidden] {
      display: none;
    }

    .editor-card {
      width: min(520px, 100%);
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 16px;
    }

    .editor-actions {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
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
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
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

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .btn-save {
        width: 100%;
        justify-self: stretch;
      }
      .calendar-day {
        min-height: 58px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Rep Tracker</h1>
      <p class="subtitle">Daily pushups, pullups, squats and dead hangs. Today is <span id="date">{{DATE}}</span>.</p>
      <div class="streak" id="streak">🔥 {{STREAK}} day streak</div>
    </header>

    <section class="rings">
      <div class="ring" id="pushupRing">
        <div class="ring-dial">
          <svg viewBox="0 0 100 100" aria-hidden="true">
            <circle class="ring-track" cx="50" cy="50" r="45"></circle>
            <circle class="ring-fill" cx="50" cy="50" r="45"></circle>
          </svg>
          <span class="progress-label">{{PUSHUPS}}/{{GOAL_PUSHUPS}}</span>
        </div>
        <span class="ring-name">Pushups</span>
      </div>
      <div class="ring" id="pullupRing">
        <div class="ring-dial">
          <svg viewBox="0 0 100 100" aria-hidden="true">
            <circle class="ring-track" cx="50" cy="50" r="45"></circle>
            <circle class="ring-fill" cx="50" cy="50" r="45"></circle>
          </svg>
          <span class="progress-label">{{PULLUPS}}/{{GOAL_PULLUPS}}</span>
        </div>
        <span class="ring-name">Pullups</span>
      </div>
      <div class="ring" id="squatRing">
        <div class="ring-dial">
          <svg viewBox="0 0 100 100" aria-hidden="true">
            <circle class="ring-track" cx="50" cy="50" r="45"></circle>
            <circle class="ring-fill" cx="50" cy="50" r="45"></circle>
          </svg>
          <span class="progress-label">{{SQUATS}}/{{GOAL_SQUATS}}</span>
        </div>
        <span class="ring-name">Squats</span>
      </div>
      <div class="stat">
        <span class="label">Dead hang</span>
        <span id="deadHangToday" class="value">{{DEAD_HANG}}</span>
      </div>
    </section>

    <section>
      <h2>Log today</h2>
      <div class="form-grid">
        <label>Pushups
          <input id="pushups" type="number" min="0" placeholder="0" />
        </label>
        <label>Pullups
          <input id="pullups" type="number" min="0" placeholder="0" />
        </label>
        <label>Squats
          <input id="squats" type="number" min="0" placeholder="0" />
        </label>
        <label>Dead hang
          <input id="deadHang" type="text" placeholder="m:ss" />
        </label>
      </div>
      <button class="btn-save" id="saveEntry" type="button">Save entry</button>
    </section>

    <section class="goals-section">
      <h2>Goals</h2>
      <div class="form-grid">
        <label>Pushups
          <input id="goalPushups" type="number" min="0" value="{{GOAL_PUSHUPS}}" />
        </label>
        <label>Pullups
          <input id="goalPullups" type="number" min="0" value="{{GOAL_PULLUPS}}" />
        </label>
        <label>Squats
          <input id="goalSquats" type="number" min="0" value="{{GOAL_SQUATS}}" />
        </label>
      </div>
    </section>

    <section>
      <div class="calendar-header">
        <button class="nav" id="prevMonth" type="button" aria-label="Previous month">&lt;</button>
        <h2 id="calendarMonthYear"></h2>
        <button class="nav" id="nextMonth" type="button" aria-label="Next month">&gt;</button>
      </div>
      <div class="calendar-head">
        <span>Sun</span><span>Mon</span><span>Tue</span><span>Wed</span><span>Thu</span><span>Fri</span><span>Sat</span>
      </div>
      <div class="calendar" id="calendar"></div>
    </section>

    <section>
      <h2>Summary</h2>
      <div class="summary" id="summary"></div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Saved counts add onto today's totals and a new dead hang time replaces the old one. Click a calendar day to edit it.</p>
  </main>

  <div class="editor" id="editor" hidden>
    <div class="editor-card">
      <h2 id="editorDate"></h2>
      <div class="form-grid">
        <label>Pushups
          <input id="editPushups" type="number" min="0" />
        </label>
        <label>Pullups
          <input id="editPullups" type="number" min="0" />
        </label>
        <label>Squats
          <input id="editSquats" type="number" min="0" />
        </label>
        <label>Dead hang
          <input id="editDeadHang" type="text" placeholder="m:ss" />
        </label>
      </div>
      <div class="editor-actions">
        <button class="btn-save" id="editorSave" type="button">Save</button>
        <button class="btn-delete" id="editorDelete" type="button">Delete day</button>
        <button class="btn-ghost" id="editorClose" type="button">Close</button>
      </div>
    </div>
  </div>

  <script>
    const dateEl = document.getElementById('date');
    const streakEl = document.getElementById('streak');
    const deadHangTodayEl = document.getElementById('deadHangToday');
    const statusEl = document.getElementById('status');
    const calendarEl = document.getElementById('calendar');
    const calendarTitleEl = document.getElementById('calendarMonthYear');
    const summaryEl = document.getElementById('summary');
    const editorEl = document.getElementById('editor');
    const editorDateEl = document.getElementById('editorDate');
    const pushupsEl = document.getElementById('pushups');
    const pullupsEl = document.getElementById('pullups');
    const squatsEl = document.getElementById('squats');
    const deadHangEl = document.getElementById('deadHang');
    const goalPushupsEl = document.getElementById('goalPushups');
    const goalPullupsEl = document.getElementById('goalPullups');
    const goalSquatsEl = document.getElementById('goalSquats');
    const editPushupsEl = document.getElementById('editPushups');
    const editPullupsEl = document.getElementById('editPullups');
    const editSquatsEl = document.getElementById('editSquats');
    const editDeadHangEl = document.getElementById('editDeadHang');

    const statusGlyph = { met: '✅', partial: '⚠️', none: '❌' };

    let cursor = null;
    let editing = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const updateRing = (id, progress) => {
      const fill = document.querySelector(`#${id} .ring-fill`);
      const label = document.querySelector(`#${id} .progress-label`);
      fill.style.strokeDashoffset = 283 - (283 * progress.percent) / 100;
      label.textContent = `${progress.value}/${progress.goal}`;
    };

    const applyToday = (data) => {
      dateEl.textContent = data.date;
      updateRing('pushupRing', data.pushups);
      updateRing('pullupRing', data.pullups);
      updateRing('squatRing', data.squats);
      deadHangTodayEl.textContent = data.deadHang || '--';
      streakEl.textContent = `🔥 ${data.streak} day streak`;
    };

    const loadToday = async () => {
      const res = await fetch('/api/today');
      if (!res.ok) {
        throw new Error('Unable to load today data');
      }
      const data = await res.json();
      if (!cursor) {
        const [year, month] = data.date.split('-').map(Number);
        cursor = { year, month };
      }
      applyToday(data);
    };

    const renderCalendar = (data) => {
      calendarTitleEl.textContent = data.label;
      calendarEl.innerHTML = '';
      data.cells.forEach((cell) => {
        const dayBox = document.createElement('div');
        dayBox.className = 'calendar-day';
        if (!cell.in_month) {
          dayBox.classList.add('outside');
        }
        if (cell.today) {
          dayBox.classList.add('today');
        }
        let html = `<div class="date-label">${cell.day}</div>`;
        if (cell.entry) {
          const marks = [cell.entry.pushups, cell.entry.pullups, cell.entry.squats]
            .map((status) => `<span>${statusGlyph[status]}</span>`)
            .join('');
          html += `<div class="emoji-indicators">${marks}</div>`;
          if (cell.entry.deadHang) {
            html += `<div class="dead-hang-label">⏱ ${cell.entry.deadHang}</div>`;
          }
        }
        dayBox.innerHTML = html;
        dayBox.addEventListener('click', () => {
          openEditor(cell.date).catch((err) => setStatus(err.message, 'error'));
        });
        calendarEl.appendChild(dayBox);
      });
    };

    const loadCalendar = async () => {
      const res = await fetch(`/api/calendar/${cursor.year}/${cursor.month}`);
      if (!res.ok) {
        throw new Error('Unable to load calendar');
      }
      renderCalendar(await res.json());
    };

    const loadSummary = async () => {
      const res = await fetch('/api/summary');
      if (!res.ok) {
        throw new Error('Unable to load summary');
      }
      const data = await res.json();
      summaryEl.innerHTML = `
        <strong>Week to Date:</strong> Pushups: ${data.week.pushups}, Pullups: ${data.week.pullups}, Squats: ${data.week.squats}<br>
        <strong>Month to Date:</strong> Pushups: ${data.month.pushups}, Pullups: ${data.month.pullups}, Squats: ${data.month.squats}<br>
        <strong>Year to Date:</strong> Pushups: ${data.year.pushups}, Pullups: ${data.year.pullups}, Squats: ${data.year.squats}<br>
        <strong>All Time:</strong> Pushups: ${data.all_time.pushups}, Pullups: ${data.all_time.pullups}, Squats: ${data.all_time.squats}
      `;
    };

    const refresh = async () => {
      await loadToday();
      await Promise.all([loadCalendar(), loadSummary()]);
    };

    const saveToday = async () => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/entry', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          pushups: pushupsEl.value,
          pullups: pullupsEl.value,
          squats: squatsEl.value,
          deadHang: deadHangEl.value
        })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      [pushupsEl, pullupsEl, squatsEl, deadHangEl].forEach((input) => {
        input.value = '';
      });
      applyToday(await res.json());
      await Promise.all([loadCalendar(), loadSummary()]);
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const saveGoals = async () => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/goals', {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          pushups: goalPushupsEl.value,
          pullups: goalPullupsEl.value,
          squats: goalSquatsEl.value
        })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      const saved = await res.json();
      goalPushupsEl.value = saved.pushups;
      goalPullupsEl.value = saved.pullups;
      goalSquatsEl.value = saved.squats;
      await refresh();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const openEditor = async (date) => {
      const res = await fetch(`/api/entry/${date}`);
      if (!res.ok) {
        throw new Error('Unable to load entry');
      }
      const data = await res.json();
      editing = data.date;
      editorDateEl.textContent = `Edit ${data.date}`;
      editPushupsEl.value = data.entry.pushups;
      editPullupsEl.value = data.entry.pullups;
      editSquatsEl.value = data.entry.squats;
      editDeadHangEl.value = data.entry.deadHang;
      editorEl.hidden = false;
    };

    const saveEditor = async () => {
      setStatus('Saving...', 'info');
      const res = await fetch(`/api/entry/${editing}`, {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          pushups: editPushupsEl.value,
          pullups: editPullupsEl.value,
          squats: editSquatsEl.value,
          deadHang: editDeadHangEl.value
        })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      editorEl.hidden = true;
      await refresh();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const deleteEditor = async () => {
      setStatus('Removing...', 'info');
      const res = await fetch(`/api/entry/${editing}`, { method: 'DELETE' });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      editorEl.hidden = true;
      await refresh();
      setStatus('Removed', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const shiftMonth = (delta) => {
      if (!cursor) {
        return;
      }
      let { year, month } = cursor;
      month += delta;
      if (month < 1) {
        month = 12;
        year -= 1;
      } else if (month > 12) {
        month = 1;
        year += 1;
      }
      cursor = { year, month };
      loadCalendar().catch((err) => setStatus(err.message, 'error'));
    };

    document.getElementById('saveEntry').addEventListener('click', () => {
      saveToday().catch((err) => setStatus(err.message, 'error'));
    });

    document.querySelectorAll('.goals-section input').forEach((input) => {
      input.addEventListener('change', () => {
        saveGoals().catch((err) => setStatus(err.message, 'error'));
      });
    });

    document.getElementById('prevMonth').addEventListener('click', () => shiftMonth(-1));
    document.getElementById('nextMonth').addEventListener('click', () => shiftMonth(1));

    document.getElementById('editorSave').addEventListener('click', () => {
      saveEditor().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('editorDelete').addEventListener('click', () => {
      deleteEditor().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('editorClose').addEventListener('click', () => {
      editorEl.hidden = true;
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
