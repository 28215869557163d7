use crate::form::PredictForm;

/// Renders the prediction form, optionally pre-filled and with a result line.
pub fn render_index(values: &PredictForm, prediction_text: Option<&str>) -> String {
    let field = |value: &Option<String>| escape_html(value.as_deref().unwrap_or(""));
    let result = prediction_text
        .map(|text| format!(r#"<div class="result">{}</div>"#, escape_html(text)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Student Pass Predictor</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 600px; margin: 50px auto; padding: 20px; }}
        .container {{ background: #f5f5f5; padding: 25px; border-radius: 10px; }}
        .form-group {{ margin: 15px 0; }}
        label {{ display: block; margin-bottom: 5px; font-weight: bold; }}
        input {{ width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; }}
        button {{ background: #007bff; color: white; padding: 12px 24px; border: none; border-radius: 4px; cursor: pointer; }}
        .result {{ margin-top: 20px; padding: 20px; border-radius: 5px; background: #d1ecf1; font-weight: bold; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Student Pass Predictor</h1>
        <form action="/predict" method="post">
            <div class="form-group">
                <label for="study_hours">Study Hours:</label>
                <input type="text" id="study_hours" name="study_hours" value="{study_hours}" required>
            </div>
            <div class="form-group">
                <label for="sleep_hours">Sleep Hours:</label>
                <input type="text" id="sleep_hours" name="sleep_hours" value="{sleep_hours}" required>
            </div>
            <div class="form-group">
                <label for="marks">Marks:</label>
                <input type="text" id="marks" name="marks" value="{marks}" placeholder="0">
            </div>
            <button type="submit">Predict</button>
        </form>
        {result}
    </div>
</body>
</html>
"#,
        study_hours = field(&values.study_hours),
        sleep_hours = field(&values.sleep_hours),
        marks = field(&values.marks),
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
