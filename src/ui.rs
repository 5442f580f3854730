pub fn render_index(title: &str, subtitle: &str) -> String {
    INDEX_HTML
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{SUBTITLE}}", &escape_html(subtitle))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    body {
      margin: 0;
      font-family: system-ui, sans-serif;
      background: #f3f4f6;
      color: #1f2937;
    }

    main {
      max-width: 960px;
      margin: 0 auto;
      padding: 32px 20px;
    }

    .filters {
      display: flex;
      gap: 12px;
      align-items: end;
      margin-bottom: 24px;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 16px;
    }

    .card {
      background: #fff;
      border-radius: 12px;
      padding: 16px 20px;
      box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    td {
      padding: 4px 0;
    }

    td.num {
      text-align: right;
    }

    #status.error {
      color: #b91c1c;
    }
  </style>
</head>
<body>
  <main>
    <h1>{{TITLE}}</h1>
    <p>{{SUBTITLE}}</p>

    <form class="filters" id="filters">
      <label>From <input type="date" id="start" required /></label>
      <label>To <input type="date" id="end" required /></label>
      <button type="submit">Apply</button>
      <span id="status"></span>
    </form>

    <div class="grid">
      <section class="card">
        <h2>Total conversations</h2>
        <p id="total">-</p>
        <small id="updated"></small>
      </section>
      <section class="card">
        <h2>Top subjects</h2>
        <table id="subjects"></table>
      </section>
      <section class="card">
        <h2>Top branches</h2>
        <table id="branches"></table>
      </section>
    </div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const setStatus = (text, kind) => {
      statusEl.textContent = text;
      statusEl.className = kind || '';
    };

    const fillTable = (id, buckets) => {
      const table = document.getElementById(id);
      table.innerHTML = '';
      buckets.forEach((bucket) => {
        const row = table.insertRow();
        row.insertCell().textContent = bucket.name;
        const count = row.insertCell();
        count.className = 'num';
        count.textContent = `${bucket.count} (${bucket.percentage}%)`;
      });
    };

    const load = async () => {
      setStatus('Loading...');
      const res = await fetch('/api/dashboard/stats', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
          startDate: document.getElementById('start').value,
          endDate: document.getElementById('end').value,
        }),
      });
      const result = await res.json();
      if (!result.success) {
        throw new Error(result.error || 'Failed to fetch dashboard data');
      }
      const data = result.data;
      document.getElementById('total').textContent = data.totalConversations;
      document.getElementById('updated').textContent = `Updated ${data.lastUpdated}`;
      fillTable('subjects', data.topSubjects);
      fillTable('branches', data.topBranches);
      setStatus('');
    };

    const today = new Date();
    const monthAgo = new Date(today.getTime() - 30 * 24 * 60 * 60 * 1000);
    document.getElementById('start').value = monthAgo.toISOString().split('T')[0];
    document.getElementById('end').value = today.toISOString().split('T')[0];

    document.getElementById('filters').addEventListener('submit', (event) => {
      event.preventDefault();
      load().catch((err) => setStatus(err.message, 'error'));
    });

    load().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
