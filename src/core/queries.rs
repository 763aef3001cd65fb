/// Highest payment not made on the 1st of a month, with the payee's name, age and department.
pub const QUESTION_1_QUERY: &str = "\
SELECT
  p.max_amount AS SALARY,
  CONCAT(e.FIRST_NAME, ' ', e.LAST_NAME) AS NAME,
  TIMESTAMPDIFF(YEAR, e.DOB, CURDATE()) AS AGE,
  d.DEPARTMENT_NAME
FROM (
  SELECT MAX(AMOUNT) AS max_amount
  FROM PAYMENTS
  WHERE DAY(PAYMENT_TIME) <> 1
) p
JOIN PAYMENTS pay
  ON pay.AMOUNT = p.max_amount
  AND DAY(pay.PAYMENT_TIME) <> 1
JOIN EMPLOYEE e ON e.EMP_ID = pay.EMP_ID
JOIN DEPARTMENT d ON d.DEPARTMENT_ID = e.DEPARTMENT;
";

/// Every employee with the number of younger colleagues in the same department.
pub const QUESTION_2_QUERY: &str = "\
SELECT
  e.EMP_ID,
  e.FIRST_NAME,
  e.LAST_NAME,
  d.DEPARTMENT_NAME,
  (
    SELECT COUNT(1)
    FROM EMPLOYEE e2
    WHERE e2.DEPARTMENT = e.DEPARTMENT
      AND TIMESTAMPDIFF(YEAR, e2.DOB, CURDATE()) < TIMESTAMPDIFF(YEAR, e.DOB, CURDATE())
  ) AS YOUNGER_EMPLOYEES_COUNT
FROM EMPLOYEE e
JOIN DEPARTMENT d ON d.DEPARTMENT_ID = e.DEPARTMENT
ORDER BY e.EMP_ID DESC;
";
