pub fn render_index(month: &str, date_input: &str, total: f64) -> String {
    INDEX_HTML
        .replace("{{MONTH}}", month)
        .replace("{{DATE}}", date_input)
        .replace("{{TOTAL}}", &format!("{total:.1}"))
}

pub fn render_report(month: &str) -> String {
    REPORT_HTML.replace("{{MONTH}}", month)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Work Hours Log</title>
  <style>
    :root {
      --bg: #f5f6f7;
      --ink: #333;
      --accent: #1f66ff;
      --accent-soft: #9db7ff;
      --danger: #ff2d2d;
      --card: #fff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      padding: 24px;
      display: flex;
      justify-content: center;
      background: var(--bg);
      color: var(--ink);
      font-family: "Helvetica Neue", Arial, sans-serif;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 16px;
      padding: 28px;
      box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
      border: 1px solid #eee;
    }

    h1 {
      font-size: 30px;
      margin: 0;
      text-align: center;
    }

    .total-line {
      margin-top: 14px;
      text-align: center;
      font-size: 20px;
    }

    .total-line .label {
      color: #666;
    }

    form {
      margin-top: 28px;
    }

    label {
      display: block;
      font-size: 16px;
      margin-bottom: 10px;
    }

    input[type="text"] {
      width: 100%;
      padding: 14px 16px;
      font-size: 22px;
      border-radius: 10px;
      border: 2px solid var(--ink);
      outline: none;
    }

    .preview {
      margin-top: 12px;
      color: #666;
      font-size: 18px;
    }

    .submit {
      width: 100%;
      margin-top: 18px;
      padding: 16px;
      font-size: 22px;
      border-radius: 10px;
      border: none;
      background: var(--accent);
      color: #fff;
      cursor: pointer;
    }

    .submit:disabled {
      background: var(--accent-soft);
      cursor: not-allowed;
    }

    .list-title {
      margin-top: 28px;
      font-size: 18px;
      font-weight: 700;
    }

    .entries {
      margin-top: 12px;
      display: grid;
      gap: 12px;
    }

    .entry {
      border: 2px solid var(--ink);
      border-radius: 12px;
      padding: 14px;
      display: grid;
      grid-template-columns: 1fr auto;
      gap: 10px;
      align-items: center;
    }

    .entry .date {
      font-size: 20px;
      font-weight: 700;
    }

    .entry .hours {
      margin-top: 8px;
      font-size: 18px;
    }

    .entry .display-date {
      margin-top: 10px;
      font-size: 15px;
      color: #666;
    }

    .entry .buttons {
      display: flex;
      gap: 12px;
      align-items: center;
    }

    .entry input {
      width: 140px;
      padding: 6px 8px;
      font-size: 18px;
      border-radius: 8px;
      border: 2px solid var(--ink);
    }

    .link-btn {
      border: none;
      background: transparent;
      color: var(--accent);
      cursor: pointer;
      font-size: 18px;
    }

    .link-btn.delete {
      color: var(--danger);
    }

    .save-btn {
      border: none;
      background: var(--accent);
      color: #fff;
      padding: 8px 12px;
      border-radius: 10px;
      cursor: pointer;
      font-size: 16px;
    }

    .cancel-btn {
      border: 2px solid var(--ink);
      background: #fff;
      color: var(--ink);
      padding: 8px 12px;
      border-radius: 10px;
      cursor: pointer;
      font-size: 16px;
    }

    .clear-btn {
      width: 100%;
      margin-top: 18px;
      padding: 14px 16px;
      font-size: 18px;
      border-radius: 10px;
      border: 2px solid var(--ink);
      background: #fff;
      cursor: pointer;
    }

    .empty {
      color: #666;
    }

    .status {
      min-height: 1.2em;
      margin-top: 12px;
      text-align: center;
      font-size: 15px;
      color: #2d7a4b;
    }

    .footer-row {
      margin-top: 16px;
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .footer-row a {
      color: var(--accent);
      font-size: 16px;
    }

    .note {
      color: #888;
      font-size: 13px;
    }
  </style>
</head>
<body>
  <div class="app">
    <h1>Work Hours Log</h1>

    <div class="total-line">
      <span class="label">Total: </span><b id="total">{{TOTAL}}</b><span> hours</span>
    </div>

    <form id="add-form">
      <label for="date-input">Date</label>
      <input id="date-input" type="text" value="{{DATE}}" placeholder="e.g. 2026/01/01" inputmode="numeric" />

      <label for="hours-input" style="margin-top: 18px;">Hours worked</label>
      <input id="hours-input" type="text" placeholder="e.g. 5 / 2.5" inputmode="decimal" />

      <div class="preview">Typing: <span id="preview">0</span> hours</div>

      <button id="add-btn" class="submit" type="submit" disabled>Add</button>
    </form>

    <div class="status" id="status"></div>

    <div class="list-title">Entries</div>
    <div class="entries" id="entries"><div class="empty">No entries yet</div></div>

    <button id="clear-btn" class="clear-btn" type="button">Clear all entries</button>

    <div class="footer-row">
      <a href="/report">Monthly report &rarr;</a>
      <span class="note">Saved on this device (month: <span id="month">{{MONTH}}</span>)</span>
    </div>
  </div>

  <script>
    const totalEl = document.getElementById('total');
    const monthEl = document.getElementById('month');
    const dateEl = document.getElementById('date-input');
    const hoursEl = document.getElementById('hours-input');
    const previewEl = document.getElementById('preview');
    const addBtn = document.getElementById('add-btn');
    const addForm = document.getElementById('add-form');
    const entriesEl = document.getElementById('entries');
    const clearBtn = document.getElementById('clear-btn');
    const statusEl = document.getElementById('status');

    let currentMonth = '{{MONTH}}';
    let editingId = null;
    let statusTimer = null;

    // Mirrors the server-side normalization so the preview already shows the
    // canonical value while typing.
    const normalizeNumberText = (raw) =>
      raw
        .trim()
        .replace(/[０-９]/g, (ch) => String.fromCharCode(ch.charCodeAt(0) - 0xfee0))
        .replace(/[．。，、]/g, '.')
        .replace(/[－]/g, '-')
        .replace(/[\s　]/g, '');

    const parseHours = (raw) => {
      const text = normalizeNumberText(raw);
      if (!text) return Number.NaN;
      const n = Number(text);
      return Number.isFinite(n) ? n : Number.NaN;
    };

    const toIsoDate = (input) => {
      const unified = input.trim().replace(/\./g, '/').replace(/-/g, '/');
      const m = unified.match(/^(\d{4})\/(\d{1,2})\/(\d{1,2})$/);
      if (!m) return '';
      const mo = Number(m[2]);
      const d = Number(m[3]);
      if (mo < 1 || mo > 12) return '';
      if (d < 1 || d > 31) return '';
      return m[1] + '-' + String(mo).padStart(2, '0') + '-' + String(d).padStart(2, '0');
    };

    const setStatus = (message) => {
      statusEl.textContent = message;
      if (statusTimer) clearTimeout(statusTimer);
      statusTimer = setTimeout(() => {
        statusEl.textContent = '';
        statusTimer = null;
      }, 1200);
    };

    const updateForm = () => {
      const n = parseHours(hoursEl.value);
      previewEl.textContent = Number.isFinite(n) ? n : 0;
      addBtn.disabled = !(toIsoDate(dateEl.value) && Number.isFinite(n) && n > 0);
    };

    const renderList = (data) => {
      currentMonth = data.month;
      monthEl.textContent = data.month;
      totalEl.textContent = data.total.toFixed(1);
      entriesEl.textContent = '';

      if (!data.entries.length) {
        const empty = document.createElement('div');
        empty.className = 'empty';
        empty.textContent = 'No entries yet';
        entriesEl.appendChild(empty);
        return;
      }

      data.entries.forEach((entry) => {
        const row = document.createElement('div');
        row.className = 'entry';
        const info = document.createElement('div');
        const buttons = document.createElement('div');
        buttons.className = 'buttons';

        const dateLine = document.createElement('div');
        dateLine.className = 'date';
        dateLine.textContent = entry.date;
        info.appendChild(dateLine);

        const hoursLine = document.createElement('div');
        hoursLine.className = 'hours';

        if (editingId === entry.id) {
          const editInput = document.createElement('input');
          editInput.value = entry.hours;
          editInput.setAttribute('inputmode', 'decimal');
          editInput.addEventListener('input', () => {
            editInput.value = normalizeNumberText(editInput.value);
          });
          hoursLine.appendChild(editInput);

          const saveBtn = document.createElement('button');
          saveBtn.className = 'save-btn';
          saveBtn.type = 'button';
          saveBtn.textContent = 'Save';
          saveBtn.addEventListener('click', () => saveEdit(entry.id, editInput.value));

          const cancelBtn = document.createElement('button');
          cancelBtn.className = 'cancel-btn';
          cancelBtn.type = 'button';
          cancelBtn.textContent = 'Cancel';
          cancelBtn.addEventListener('click', () => {
            editingId = null;
            refresh();
          });

          buttons.appendChild(saveBtn);
          buttons.appendChild(cancelBtn);
        } else {
          const value = document.createElement('b');
          value.textContent = entry.hours;
          hoursLine.appendChild(value);
          hoursLine.appendChild(document.createTextNode(' hours'));

          const editBtn = document.createElement('button');
          editBtn.className = 'link-btn';
          editBtn.type = 'button';
          editBtn.textContent = 'Edit';
          editBtn.addEventListener('click', () => {
            editingId = entry.id;
            refresh();
          });

          const deleteBtn = document.createElement('button');
          deleteBtn.className = 'link-btn delete';
          deleteBtn.type = 'button';
          deleteBtn.textContent = 'Delete';
          deleteBtn.addEventListener('click', () => removeEntry(entry.id));

          buttons.appendChild(editBtn);
          buttons.appendChild(deleteBtn);
        }
        info.appendChild(hoursLine);

        const displayLine = document.createElement('div');
        displayLine.className = 'display-date';
        displayLine.textContent = '(entered as: ' + entry.display_date + ')';
        info.appendChild(displayLine);

        row.appendChild(info);
        row.appendChild(buttons);
        entriesEl.appendChild(row);
      });
    };

    const refresh = async () => {
      const res = await fetch('/api/entries?month=' + encodeURIComponent(currentMonth));
      if (!res.ok) return;
      renderList(await res.json());
    };

    const addEntry = async () => {
      const res = await fetch('/api/entries', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date: dateEl.value, hours: hoursEl.value })
      });
      if (!res.ok) return;
      renderList(await res.json());
      hoursEl.value = '';
      updateForm();
      setStatus('Added');
      hoursEl.focus();
    };

    const saveEdit = async (id, hours) => {
      const res = await fetch('/api/entries/' + encodeURIComponent(id), {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ hours })
      });
      if (!res.ok) return;
      editingId = null;
      renderList(await res.json());
    };

    const removeEntry = async (id) => {
      const res = await fetch('/api/entries/' + encodeURIComponent(id), { method: 'DELETE' });
      if (!res.ok) return;
      if (editingId === id) editingId = null;
      renderList(await res.json());
    };

    const clearAll = async () => {
      const res = await fetch('/api/entries/clear?month=' + encodeURIComponent(currentMonth), {
        method: 'POST'
      });
      if (!res.ok) return;
      editingId = null;
      renderList(await res.json());
    };

    dateEl.addEventListener('input', updateForm);
    hoursEl.addEventListener('input', () => {
      hoursEl.value = normalizeNumberText(hoursEl.value);
      updateForm();
    });

    addForm.addEventListener('submit', (event) => {
      event.preventDefault();
      addEntry();
    });

    clearBtn.addEventListener('click', clearAll);

    updateForm();
    refresh();
  </script>
</body>
</html>
"#;

const REPORT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Work Hours Log - Monthly Report</title>
  <style>
    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      padding: 24px;
      background: #f5f6f7;
      color: #333;
      font-family: "Helvetica Neue", Arial, sans-serif;
    }

    .toolbar {
      display: flex;
      gap: 12px;
      flex-wrap: wrap;
    }

    .toolbar a,
    .toolbar button,
    .toolbar select {
      padding: 6px 12px;
      border-radius: 8px;
      border: 1px solid #ccc;
      background: #fff;
      cursor: pointer;
      font-size: 15px;
      color: #333;
      text-decoration: none;
    }

    .sheet {
      margin-top: 20px;
      background: #fff;
      border-radius: 16px;
      padding: 28px;
      border: 1px solid #ddd;
      box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
    }

    h1 {
      margin-top: 0;
    }

    .summary {
      margin-top: 6px;
      color: #555;
      font-size: 18px;
    }

    .mascot-area {
      margin-top: 18px;
      text-align: center;
    }

    .mascot {
      font-size: 96px;
      display: inline-block;
    }

    .mascot.shake {
      animation: mascot-shake 0.16s infinite;
    }

    .mascot.shake-strong {
      animation: mascot-shake-strong 0.12s infinite;
    }

    .mascot-message {
      margin-top: 10px;
      font-size: 18px;
      font-weight: 800;
    }

    .mascot-note {
      margin-top: 6px;
      color: #777;
      font-size: 13px;
    }

    table {
      width: 100%;
      margin-top: 24px;
      border-collapse: collapse;
    }

    th {
      border-bottom: 2px solid #ccc;
      padding: 10px;
      text-align: left;
    }

    th.num,
    td.num {
      text-align: right;
    }

    td {
      border-bottom: 1px solid #ddd;
      padding: 10px;
    }

    tr.total-row td {
      font-weight: 800;
    }

    .generated {
      margin-top: 16px;
      font-size: 12px;
      color: #888;
    }

    @keyframes mascot-shake {
      0% { transform: translate(0, 0) rotate(0deg); }
      25% { transform: translate(-2px, 1px) rotate(-0.4deg); }
      50% { transform: translate(2px, -1px) rotate(0.4deg); }
      75% { transform: translate(-1px, -2px) rotate(-0.2deg); }
      100% { transform: translate(1px, 2px) rotate(0.2deg); }
    }

    @keyframes mascot-shake-strong {
      0% { transform: translate(0, 0) rotate(0deg); }
      20% { transform: translate(-4px, 2px) rotate(-0.8deg); }
      40% { transform: translate(4px, -2px) rotate(0.8deg); }
      60% { transform: translate(-3px, -3px) rotate(-0.6deg); }
      80% { transform: translate(3px, 3px) rotate(0.6deg); }
      100% { transform: translate(0, 0) rotate(0deg); }
    }

    @media print {
      .no-print {
        display: none !important;
      }
    }
  </style>
</head>
<body>
  <div class="toolbar no-print">
    <a href="/">&larr; Back to the log</a>
    <select id="month-select"></select>
    <button id="print-btn" type="button">Print / PDF</button>
  </div>

  <div class="sheet">
    <h1>Monthly Report</h1>

    <div class="summary">
      Month: <span id="report-month">{{MONTH}}</span>&ensp;
      Days: <span id="report-days">0</span>&ensp;
      Total: <b id="report-total">0.0</b> hours
    </div>

    <div class="mascot-area">
      <span id="mascot" class="mascot">&#128522;</span>
      <div class="mascot-message" id="mascot-message"></div>
      <div class="mascot-note">(0-100: calm / 101-150: trembling / 151+: strong shake)</div>
    </div>

    <table>
      <thead>
        <tr>
          <th>Date</th>
          <th class="num">Hours worked</th>
        </tr>
      </thead>
      <tbody id="report-rows"></tbody>
    </table>

    <div class="generated">Generated by Work Hours Log</div>
  </div>

  <script>
    const monthSelect = document.getElementById('month-select');
    const monthEl = document.getElementById('report-month');
    const daysEl = document.getElementById('report-days');
    const totalEl = document.getElementById('report-total');
    const mascotEl = document.getElementById('mascot');
    const messageEl = document.getElementById('mascot-message');
    const rowsEl = document.getElementById('report-rows');
    const printBtn = document.getElementById('print-btn');

    const initialMonth = '{{MONTH}}';

    const MASCOT_FACES = {
      normal: '\u{1F60A}',
      sweating: '\u{1F605}',
      pale: '\u{1F628}',
      exhausted: '\u{1F635}'
    };

    const loadMonths = async () => {
      let months = [];
      try {
        const res = await fetch('/api/months');
        if (res.ok) {
          months = (await res.json()).months;
        }
      } catch (err) {
        // leave the selector with just the current month
      }
      if (!months.includes(initialMonth)) {
        months.unshift(initialMonth);
      }
      monthSelect.textContent = '';
      months.forEach((month) => {
        const option = document.createElement('option');
        option.value = month;
        option.textContent = month;
        option.selected = month === initialMonth;
        monthSelect.appendChild(option);
      });
    };

    const loadReport = async (month) => {
      const res = await fetch('/api/report?month=' + encodeURIComponent(month));
      if (!res.ok) return;
      const report = await res.json();

      monthEl.textContent = report.month;
      daysEl.textContent = report.days;
      totalEl.textContent = report.total.toFixed(1);
      mascotEl.textContent = MASCOT_FACES[report.severity] || MASCOT_FACES.normal;
      messageEl.textContent = report.message;
      mascotEl.className =
        'mascot' +
        (report.shake_level === 1 ? ' shake' : report.shake_level >= 2 ? ' shake-strong' : '');

      rowsEl.textContent = '';
      report.rows.forEach((row) => {
        const tr = document.createElement('tr');
        const dateTd = document.createElement('td');
        dateTd.textContent = row.date;
        const hoursTd = document.createElement('td');
        hoursTd.className = 'num';
        hoursTd.textContent = row.hours.toFixed(1);
        tr.appendChild(dateTd);
        tr.appendChild(hoursTd);
        rowsEl.appendChild(tr);
      });

      const totalRow = document.createElement('tr');
      totalRow.className = 'total-row';
      const label = document.createElement('td');
      label.textContent = 'Total';
      const value = document.createElement('td');
      value.className = 'num';
      value.textContent = report.total.toFixed(1);
      totalRow.appendChild(label);
      totalRow.appendChild(value);
      rowsEl.appendChild(totalRow);
    };

    monthSelect.addEventListener('change', () => loadReport(monthSelect.value));
    printBtn.addEventListener('click', () => window.print());

    loadMonths();
    loadReport(initialMonth);
  </script>
</body>
</html>
"#;
