//! Server-rendered HTML pages.
//!
//! The page shells are `&'static str` templates bundled into the binary;
//! the mark-dependent fragments (zone checkboxes, mark options) are
//! rendered here and spliced in. All calculations happen through the JSON
//! endpoints.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{Mark, Symbol};
use crate::store::zones;

/// Zone ticked when the lookup page first opens.
pub const DEFAULT_LOOKUP_ZONE: char = '2';

const STYLE: &str = r#"
  body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 960px; padding: 1rem; }
  h1 { font-size: 1.4rem; margin: 0 0 0.75rem; }
  fieldset { border: 1px solid #ccd; margin-bottom: 1rem; }
  select, button { font-size: 1rem; margin: 0.25rem; }
  table { border-collapse: collapse; width: 100%; }
  th, td { border-bottom: 1px solid #dde; padding: 0.3rem; text-align: left; }
  .result { font-size: 1.2rem; margin-top: 1rem; }
  .error { color: #c0392b; }
  .mark-tag { border-radius: 3px; color: #fff; font-size: 0.6em; padding: 1px 4px; }
  .start-tag { background: #3498db; }
  .finish-tag { background: #2980b9; }
  .start-finish-tag { background: linear-gradient(90deg, #3498db 50%, #2980b9 50%); }
  .port { color: #e74c3c; }
  .starboard { color: #27ae60; }
  .swatch { border: 1px solid #556; display: inline-block; height: 0.9em; vertical-align: middle; width: 0.9em; }
  .symbol-red { background: #e74c3c; }
  .symbol-green { background: #27ae60; }
  .symbol-yellow { background: #f1c40f; }
  .symbol-black { background: #2c3e50; color: #fff; }
  .symbol-yby { background: linear-gradient(180deg, #f1c40f 33%, #2c3e50 33% 67%, #f1c40f 67%); }
  .symbol-byb { background: linear-gradient(180deg, #2c3e50 33%, #f1c40f 33% 67%, #2c3e50 67%); color: #fff; }
  .symbol-none { background: #fff; }
"#;

const LOOKUP_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mark Lookup Calculator</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <h1>Mark Lookup Calculator</h1>
  <fieldset id="zoneFilter">
    <legend>Filter by Zone</legend>
    {{ZONES}}
  </fieldset>
  <label>From <select id="fromMark">{{OPTIONS}}</select></label>
  <span id="fromSymbol" class="swatch"></span>
  <label>To <select id="toMark">{{OPTIONS}}</select></label>
  <span id="toSymbol" class="swatch"></span>
  <button id="calculate" type="button">Calculate</button>
  <div id="lookupResult" class="result"></div>
  <p><a href="/course-builder">Course builder</a></p>
  <script>
    const zoneBoxes = Array.from(document.querySelectorAll('#zoneFilter input'));

    function selectedZones() {
      return zoneBoxes.filter(cb => cb.checked).map(cb => cb.value);
    }

    function applyZoneFilter() {
      const zones = selectedZones();
      for (const select of [fromMark, toMark]) {
        for (const option of select.options) {
          option.hidden = zones.length > 0 && !zones.includes(option.value.charAt(0));
        }
      }
    }

    function showSymbol(select, swatchId) {
      const option = select.selectedOptions[0];
      document.getElementById(swatchId).className = option ? `swatch ${option.className}` : 'swatch';
    }

    async function calculateLookup() {
      const out = document.getElementById('lookupResult');
      const response = await fetch('/lookup/calculate', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ from_mark: fromMark.value, to_mark: toMark.value }),
      });
      const data = await response.json();
      if (!response.ok) {
        out.className = 'result error';
        out.textContent = data.error;
        return;
      }
      out.className = 'result';
      out.textContent = `${fromMark.value} → ${toMark.value}: ${data.bearing}° ${data.distance}nm`;
    }

    const fromMark = document.getElementById('fromMark');
    const toMark = document.getElementById('toMark');
    zoneBoxes.forEach(cb => cb.addEventListener('change', applyZoneFilter));
    fromMark.addEventListener('change', () => showSymbol(fromMark, 'fromSymbol'));
    toMark.addEventListener('change', () => showSymbol(toMark, 'toSymbol'));
    document.getElementById('calculate').addEventListener('click', calculateLookup);
    applyZoneFilter();
    showSymbol(fromMark, 'fromSymbol');
    showSymbol(toMark, 'toSymbol');
  </script>
</body>
</html>
"#;

const COURSE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Course Builder</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <h1>Course Builder</h1>
  <label>Mark <select id="markSelect">{{OPTIONS}}</select></label>
  <label>Rounding
    <select id="roundingSelect">
      <option value="S">Starboard</option>
      <option value="P">Port</option>
    </select>
  </label>
  <button id="addMark" type="button">Add to Course</button>
  <ol id="courseList"></ol>
  <button id="calculateCourse" type="button">Calculate Course Legs</button>
  <div id="courseResult"></div>
  <button id="clearCourse" type="button">Clear Course</button>
  <p><a href="/lookup">Mark lookup</a></p>
  <script>
    let courseMarks = [];

    function tagLabel(name, tags) {
      const tag = tags[name];
      if (!tag) return '';
      const cls = tag === 'Start' ? 'start-tag' : tag === 'Finish' ? 'finish-tag' : 'start-finish-tag';
      return ` <span class="mark-tag ${cls}">${tag}</span>`;
    }

    function renderCourse() {
      const list = document.getElementById('courseList');
      list.innerHTML = courseMarks.map((m, index) => {
        const side = m.rounding === 'P' ? 'port' : 'starboard';
        const tag = index === 0 ? ' <span class="mark-tag start-tag">Start</span>'
          : index === courseMarks.length - 1 ? ' <span class="mark-tag finish-tag">Finish</span>' : '';
        return `<li class="${side}"><span class="swatch ${m.symbolClass}"></span> ${m.name} (${m.rounding})${tag}</li>`;
      }).join('');
    }

    async function calculateCourse() {
      const out = document.getElementById('courseResult');
      const response = await fetch('/course', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ course: courseMarks.map(({ name, rounding }) => ({ name, rounding })) }),
      });
      const data = await response.json();
      if (!response.ok) {
        out.className = 'error';
        out.textContent = data.error;
        return;
      }
      out.className = '';
      const rows = data.legs.map(leg => `<tr>
          <td>Leg ${leg.leg_number}</td>
          <td>${leg.from.name}${tagLabel(leg.from.name, data.mark_tags)}</td>
          <td>${leg.to.name}${tagLabel(leg.to.name, data.mark_tags)}</td>
          <td>${leg.bearing}°</td>
          <td>${leg.distance}nm</td>
        </tr>`).join('');
      out.innerHTML = `<table>
          <tr><th>Leg</th><th>From</th><th>To</th><th>Bearing</th><th>Distance</th></tr>
          ${rows}
        </table>
        <p>Total ${data.total_distance}nm</p>`;
    }

    document.getElementById('addMark').addEventListener('click', () => {
      const select = document.getElementById('markSelect');
      const option = select.selectedOptions[0];
      courseMarks.push({
        name: select.value,
        rounding: document.getElementById('roundingSelect').value,
        symbolClass: option ? option.className : 'symbol-none',
      });
      renderCourse();
    });
    document.getElementById('calculateCourse').addEventListener('click', calculateCourse);
    document.getElementById('clearCourse').addEventListener('click', () => {
      courseMarks = [];
      renderCourse();
      document.getElementById('courseResult').innerHTML = '';
    });
  </script>
</body>
</html>
"#;

/// Lookup calculator page: zone checkboxes and from/to selectors.
pub fn render_lookup(marks: &[Mark]) -> String {
    LOOKUP_TEMPLATE
        .replace("{{STYLE}}", STYLE)
        .replace("{{ZONES}}", &zone_checkboxes(marks))
        .replace("{{OPTIONS}}", &mark_options(marks))
}

/// Course planner page.
pub fn render_course_builder(marks: &[Mark]) -> String {
    COURSE_TEMPLATE
        .replace("{{STYLE}}", STYLE)
        .replace("{{OPTIONS}}", &mark_options(marks))
}

fn zone_checkboxes(marks: &[Mark]) -> String {
    zones(marks)
        .into_iter()
        .map(|zone| {
            let value = zone.to_string();
            let checked = if zone == DEFAULT_LOOKUP_ZONE { " checked" } else { "" };
            format!(
                r#"<label><input type="checkbox" value="{}"{}> Zone {}</label>"#,
                encode_double_quoted_attribute(&value),
                checked,
                encode_text(&value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ")
}

fn mark_options(marks: &[Mark]) -> String {
    marks
        .iter()
        .map(|mark| {
            let label = if mark.description.is_empty() {
                mark.id.clone()
            } else {
                format!("{} - {}", mark.id, mark.description)
            };
            format!(
                r#"<option value="{}" class="{}">{}</option>"#,
                encode_double_quoted_attribute(&mark.id),
                symbol_class(&mark.symbol),
                encode_text(&label)
            )
        })
        .collect()
}

/// CSS class colouring a mark by its symbol. Codes without a style of
/// their own render plain.
fn symbol_class(symbol: &Symbol) -> &'static str {
    match symbol {
        Symbol::Red => "symbol-red",
        Symbol::Green => "symbol-green",
        Symbol::Yellow => "symbol-yellow",
        Symbol::Black => "symbol-black",
        Symbol::Other(code) if code == "YBY" => "symbol-yby",
        Symbol::Other(code) if code == "BYB" => "symbol-byb",
        Symbol::Other(_) | Symbol::Unspecified => "symbol-none",
    }
}
